//! Contact repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the contact directory.
//! - Own identifier assignment.
//!
//! # Invariants
//! - Write paths validate every field before mutating storage.
//! - Identifiers start at 1, increase monotonically and are never reused,
//!   even after removal.
//! - A rejected create does not consume an identifier.
//! - Once `ContactId::MAX` has been issued, creates fail with `IdsExhausted`.
//! - Listing returns contacts in insertion order.

use crate::model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ContactValidationError),
    NotFound(ContactId),
    DirectoryFull { capacity: usize },
    IdsExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::DirectoryFull { capacity } => {
                write!(f, "directory is full ({capacity} contacts)")
            }
            Self::IdsExhausted => write!(f, "no contact ids left to assign"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DirectoryFull { .. } | Self::IdsExhausted => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Monotonic identifier generator.
///
/// The counter is wider than `ContactId` so that `ContactId::MAX` itself can
/// be issued; after that the sequence stays exhausted.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first identifier is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence whose first identifier is `first` (minimum 1).
    pub fn starting_at(first: ContactId) -> Self {
        Self {
            next: AtomicU64::new(u64::from(first.max(1))),
        }
    }

    /// Consumes and returns the next identifier, or `None` once exhausted.
    pub fn next_id(&self) -> Option<ContactId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next <= u64::from(ContactId::MAX)).then_some(next + 1)
            })
            .ok()
            .and_then(|issued| ContactId::try_from(issued).ok())
    }

    /// Returns the identifier the next call to [`Self::next_id`] yields.
    pub fn peek(&self) -> Option<ContactId> {
        ContactId::try_from(self.next.load(Ordering::Relaxed)).ok()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    fn create_contact(&mut self, draft: &ContactDraft) -> RepoResult<Contact>;
    fn get_contact(&self, id: ContactId) -> Option<Contact>;
    fn list_contacts(&self) -> Vec<Contact>;
    fn update_contact(&mut self, contact: &Contact) -> RepoResult<()>;
    fn remove_contact(&mut self, id: ContactId) -> RepoResult<Contact>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a create would be rejected with `DirectoryFull`.
    fn is_full(&self) -> bool {
        false
    }
}

/// Growable in-memory contact storage with an optional capacity limit.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
    ids: IdSequence,
    capacity: Option<usize>,
}

impl InMemoryContactRepository {
    /// Creates an unbounded, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory that holds at most `capacity` contacts.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            contacts: Vec::new(),
            ids: IdSequence::new(),
            capacity: Some(capacity),
        }
    }

    /// Identifier the next successful create receives.
    pub fn next_id(&self) -> Option<ContactId> {
        self.ids.peek()
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id == id)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn create_contact(&mut self, draft: &ContactDraft) -> RepoResult<Contact> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            warn!(
                "event=contact_create module=repo status=error error_code=directory_full capacity={capacity}"
            );
            return Err(RepoError::DirectoryFull { capacity });
        }

        let Some(id) = self.ids.peek() else {
            warn!("event=contact_create module=repo status=error error_code=ids_exhausted");
            return Err(RepoError::IdsExhausted);
        };

        let contact = match draft.clone().into_contact(id) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(
                    "event=contact_create module=repo status=rejected reason={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        // `peek` succeeded under `&mut self`, so this consumes exactly `id`.
        self.ids.next_id();
        self.contacts.push(contact.clone());
        info!(
            "event=contact_create module=repo status=ok id={} count={}",
            contact.id,
            self.contacts.len()
        );
        Ok(contact)
    }

    fn get_contact(&self, id: ContactId) -> Option<Contact> {
        self.contacts.iter().find(|contact| contact.id == id).cloned()
    }

    fn list_contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn update_contact(&mut self, contact: &Contact) -> RepoResult<()> {
        contact.validate()?;

        let Some(index) = self.position(contact.id) else {
            return Err(RepoError::NotFound(contact.id));
        };
        self.contacts[index] = contact.clone();
        info!(
            "event=contact_update module=repo status=ok id={}",
            contact.id
        );
        Ok(())
    }

    fn remove_contact(&mut self, id: ContactId) -> RepoResult<Contact> {
        let Some(index) = self.position(id) else {
            return Err(RepoError::NotFound(id));
        };
        let removed = self.contacts.remove(index);
        info!(
            "event=contact_remove module=repo status=ok id={id} count={}",
            self.contacts.len()
        );
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.contacts.len() >= capacity)
    }
}
