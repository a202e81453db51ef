//! Contact directory use-case service.
//!
//! # Responsibility
//! - Provide add/list/search/edit/remove entry points for directory callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - An edit validates only the edited field and leaves the record unchanged
//!   on rejection.
//! - An empty search term yields no results for every field.

use crate::model::contact::{Contact, ContactDraft, ContactField, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoError, RepoResult};
use crate::search::matching::{email_matches, name_matches, phone_matches};
use log::{debug, warn};

/// Ordering applied to directory listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Order in which contacts were added.
    #[default]
    Insertion,
    IdAscending,
    /// Byte-wise name order; ties keep insertion order.
    NameAscending,
}

/// Field a directory search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Email,
}

impl SearchField {
    fn matches(self, contact: &Contact, term: &str) -> bool {
        match self {
            Self::Name => name_matches(contact, term),
            Self::Phone => phone_matches(contact, term),
            Self::Email => email_matches(contact, term),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// Outcome of a single-field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub id: ContactId,
    pub field: ContactField,
    pub old: String,
    pub new: String,
}

/// Use-case service wrapper for contact directory operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Shared access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new contact, returning it with its assigned id.
    pub fn add_contact(&mut self, draft: &ContactDraft) -> RepoResult<Contact> {
        self.repo.create_contact(draft)
    }

    /// Lists every contact in the requested order.
    pub fn list_contacts(&self, order: ListOrder) -> Vec<Contact> {
        let mut contacts = self.repo.list_contacts();
        match order {
            ListOrder::Insertion => {}
            ListOrder::IdAscending => contacts.sort_by_key(|contact| contact.id),
            ListOrder::NameAscending => {
                contacts.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()))
            }
        }
        contacts
    }

    /// Gets one contact by id.
    pub fn find_by_id(&self, id: ContactId) -> Option<Contact> {
        self.repo.get_contact(id)
    }

    /// Returns contacts whose `field` matches `term`, in insertion order.
    pub fn search(&self, field: SearchField, term: &str) -> Vec<Contact> {
        if term.is_empty() {
            return Vec::new();
        }

        let hits: Vec<Contact> = self
            .repo
            .list_contacts()
            .into_iter()
            .filter(|contact| field.matches(contact, term))
            .collect();
        debug!(
            "event=contact_search module=service status=ok field={} hits={}",
            field.as_str(),
            hits.len()
        );
        hits
    }

    /// Replaces one field of an existing contact.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when `id` is unknown.
    /// - `RepoError::Validation` when `value` fails the field validator.
    pub fn edit_field(
        &mut self,
        id: ContactId,
        field: ContactField,
        value: impl Into<String>,
    ) -> RepoResult<FieldChange> {
        let mut contact = self.repo.get_contact(id).ok_or(RepoError::NotFound(id))?;
        let old = match contact.set_field(field, value) {
            Ok(old) => old,
            Err(err) => {
                warn!(
                    "event=contact_update module=service status=rejected id={id} field={field} reason={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        self.repo.update_contact(&contact)?;

        Ok(FieldChange {
            id,
            field,
            old,
            new: contact.field(field).to_string(),
        })
    }

    /// Removes a contact by id and returns it.
    pub fn remove_contact(&mut self, id: ContactId) -> RepoResult<Contact> {
        self.repo.remove_contact(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.repo.is_full()
    }
}
