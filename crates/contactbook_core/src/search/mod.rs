//! Contact matching entry points.
//!
//! # Responsibility
//! - Provide per-field match predicates used by directory search.
//!
//! # See also
//! - `service::contact_service` for search orchestration.

pub mod matching;
