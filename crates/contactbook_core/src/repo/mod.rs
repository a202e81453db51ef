//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details away from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce contact validation before storage.
//! - Repository APIs return semantic errors (`NotFound`, `DirectoryFull`).

pub mod contact_repo;
