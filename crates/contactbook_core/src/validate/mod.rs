//! Field validation engine for contact records.
//!
//! # Responsibility
//! - Decide whether name, phone and email text is well formed.
//! - Report a typed reason for every rejection.
//!
//! # Invariants
//! - Validators are pure functions of their input and never panic.
//! - Rejection is a normal return value, never an error path.
//! - `validate_*(s) == check_*(s).is_ok()` for every input.
//! - Classification is ASCII/C-locale and byte-wise.

mod classify;
pub mod email;
pub mod name;
pub mod phone;

pub use email::{check_email, validate_email, EmailRejection, MAX_EMAIL_LEN, MAX_EMAIL_LOCAL_LEN};
pub use name::{check_name, validate_name, NameRejection, MAX_NAME_LEN, MIN_NAME_LEN};
pub use phone::{check_phone, validate_phone, PhoneRejection, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};

pub use classify::is_blank;
