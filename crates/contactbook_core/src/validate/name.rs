//! Contact name validation.
//!
//! # Invariants
//! - Accepted names are 2..=49 bytes long and contain at least one letter.
//! - A digit is only accepted after the first letter (`John123`, not `123John`).
//! - Only ASCII letters, digits, space, `-`, `.` and `'` are accepted.

use super::classify::{describe_byte, is_blank};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exclusive upper bound on name length in bytes.
pub const MAX_NAME_LEN: usize = 50;
/// Minimum name length in bytes.
pub const MIN_NAME_LEN: usize = 2;

/// Reason a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Empty or whitespace-only input.
    Blank,
    TooShort { len: usize },
    TooLong { len: usize },
    /// Digit seen before any letter.
    LeadingDigit { position: usize },
    InvalidCharacter { position: usize, byte: u8 },
    /// Only punctuation, no letter at all.
    NoLetters,
}

impl NameRejection {
    /// Stable machine-readable code for logs and callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blank => "name_blank",
            Self::TooShort { .. } => "name_too_short",
            Self::TooLong { .. } => "name_too_long",
            Self::LeadingDigit { .. } => "name_leading_digit",
            Self::InvalidCharacter { .. } => "name_invalid_character",
            Self::NoLetters => "name_no_letters",
        }
    }
}

impl Display for NameRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "name cannot be blank"),
            Self::TooShort { len } => write!(
                f,
                "name has {len} characters; at least {MIN_NAME_LEN} are required"
            ),
            Self::TooLong { len } => write!(
                f,
                "name has {len} characters; at most {} are allowed",
                MAX_NAME_LEN - 1
            ),
            Self::LeadingDigit { position } => write!(
                f,
                "digit at position {position} appears before any letter"
            ),
            Self::InvalidCharacter { position, byte } => write!(
                f,
                "character {} at position {position} is not allowed in a name",
                describe_byte(*byte)
            ),
            Self::NoLetters => write!(f, "name must contain at least one letter"),
        }
    }
}

impl Error for NameRejection {}

/// Returns whether `name` is an acceptable contact name.
pub fn validate_name(name: &str) -> bool {
    check_name(name).is_ok()
}

/// Validates `name` and reports the first violated rule.
pub fn check_name(name: &str) -> Result<(), NameRejection> {
    if is_blank(name) {
        return Err(NameRejection::Blank);
    }

    let len = name.len();
    if len < MIN_NAME_LEN {
        return Err(NameRejection::TooShort { len });
    }
    if len >= MAX_NAME_LEN {
        return Err(NameRejection::TooLong { len });
    }

    let mut seen_letter = false;
    for (position, byte) in name.bytes().enumerate() {
        match byte {
            b if b.is_ascii_alphabetic() => seen_letter = true,
            b if b.is_ascii_digit() => {
                if !seen_letter {
                    return Err(NameRejection::LeadingDigit { position });
                }
            }
            b' ' | b'-' | b'.' | b'\'' => {}
            _ => return Err(NameRejection::InvalidCharacter { position, byte }),
        }
    }

    if seen_letter {
        Ok(())
    } else {
        Err(NameRejection::NoLetters)
    }
}
