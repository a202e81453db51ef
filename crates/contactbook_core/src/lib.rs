//! Core domain logic for the contact directory.
//! This crate is the single source of truth for contact invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod validate;

pub use logging::{init_logging, LogConfig, LogLevel, LoggingError, UnknownLogLevel};
pub use model::contact::{Contact, ContactDraft, ContactField, ContactId, ContactValidationError};
pub use repo::contact_repo::{
    ContactRepository, IdSequence, InMemoryContactRepository, RepoError, RepoResult,
};
pub use search::matching::{email_matches, extract_digits, name_matches, phone_matches};
pub use service::contact_service::{ContactService, FieldChange, ListOrder, SearchField};
pub use validate::{
    check_email, check_name, check_phone, validate_email, validate_name, validate_phone,
    EmailRejection, NameRejection, PhoneRejection,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
