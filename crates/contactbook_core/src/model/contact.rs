//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its unvalidated draft form.
//! - Tie every field to its validator.
//!
//! # Invariants
//! - `id` is positive and never reused for another contact.
//! - A stored contact satisfies all three field validators.
//! - Deserialized contacts are re-validated; invalid payloads are rejected.

use crate::validate::{
    check_email, check_name, check_phone, EmailRejection, NameRejection, PhoneRejection,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Directory-assigned contact identifier. Starts at 1.
pub type ContactId = u32;

/// Editable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Phone, Self::Email];

    /// Runs this field's validator against `value`.
    pub fn check(self, value: &str) -> Result<(), ContactValidationError> {
        match self {
            Self::Name => check_name(value).map_err(ContactValidationError::Name),
            Self::Phone => check_phone(value).map_err(ContactValidationError::Phone),
            Self::Email => check_email(value).map_err(ContactValidationError::Email),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for a contact or one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    Name(NameRejection),
    Phone(PhoneRejection),
    Email(EmailRejection),
    /// Identifier `0` is never assigned.
    ZeroId,
}

impl ContactValidationError {
    /// Field the failure belongs to, if any.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::Name(_) => Some(ContactField::Name),
            Self::Phone(_) => Some(ContactField::Phone),
            Self::Email(_) => Some(ContactField::Email),
            Self::ZeroId => None,
        }
    }

    /// Stable reason code, safe for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Name(reason) => reason.code(),
            Self::Phone(reason) => reason.code(),
            Self::Email(reason) => reason.code(),
            Self::ZeroId => "contact_zero_id",
        }
    }
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(reason) => write!(f, "invalid name: {reason}"),
            Self::Phone(reason) => write!(f, "invalid phone: {reason}"),
            Self::Email(reason) => write!(f, "invalid email: {reason}"),
            Self::ZeroId => write!(f, "contact id must be positive"),
        }
    }
}

impl Error for ContactValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Name(reason) => Some(reason),
            Self::Phone(reason) => Some(reason),
            Self::Email(reason) => Some(reason),
            Self::ZeroId => None,
        }
    }
}

/// Unvalidated contact input, as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Checks name, phone, then email and returns the first failure.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        ContactField::Name.check(&self.name)?;
        ContactField::Phone.check(&self.phone)?;
        ContactField::Email.check(&self.email)
    }

    /// Converts the draft into a contact with `id`, validating first.
    pub fn into_contact(self, id: ContactId) -> Result<Contact, ContactValidationError> {
        Contact::try_from(RawContact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        })
    }
}

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContact")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Re-checks every invariant. Used on repository write paths.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.id == 0 {
            return Err(ContactValidationError::ZeroId);
        }
        ContactField::Name.check(&self.name)?;
        ContactField::Phone.check(&self.phone)?;
        ContactField::Email.check(&self.email)
    }

    /// Returns the current value of `field`.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Replaces `field` after validating the new value, returning the old one.
    ///
    /// On rejection the contact is left unchanged.
    pub fn set_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<String, ContactValidationError> {
        let value = value.into();
        field.check(&value)?;
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        };
        Ok(std::mem::replace(slot, value))
    }
}

#[derive(Deserialize)]
struct RawContact {
    id: ContactId,
    name: String,
    phone: String,
    email: String,
}

impl TryFrom<RawContact> for Contact {
    type Error = ContactValidationError;

    fn try_from(raw: RawContact) -> Result<Self, Self::Error> {
        let contact = Contact {
            id: raw.id,
            name: raw.name,
            phone: raw.phone,
            email: raw.email,
        };
        contact.validate()?;
        Ok(contact)
    }
}
