//! Contact directory domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every stored contact is identified by a positive, never-reused `ContactId`.
//! - Field content is validated before a contact exists.

pub mod contact;
