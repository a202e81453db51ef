//! Contact email validation.
//!
//! A deliberately simplified RFC 5321 subset: one `@`, a dot-atom-like local
//! part, a hostname-like domain, and an alphabetic top-level label.
//!
//! # Invariants
//! - Total length is at most [`MAX_EMAIL_LEN`], local part at most
//!   [`MAX_EMAIL_LOCAL_LEN`].
//! - The local part never starts or ends with `.` and never contains `..`.
//! - The domain never starts or ends with `.`/`-` and never contains `..`.
//! - The label after the last domain `.` has two or more letters.

use super::classify::describe_byte;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum total email length in bytes.
pub const MAX_EMAIL_LEN: usize = 254;
/// Maximum local-part length in bytes.
pub const MAX_EMAIL_LOCAL_LEN: usize = 64;
/// Minimum top-level label length.
pub const MIN_TLD_LEN: usize = 2;

const LOCAL_PUNCTUATION: &[u8] = b".!#$%&'*+/=?^_`{|}~-";

/// Reason an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRejection {
    TooLong { len: usize },
    MissingAt,
    EmptyLocalPart,
    MultipleAt,
    LocalPartTooLong { len: usize },
    EmptyDomain,
    InvalidLocalCharacter { position: usize, byte: u8 },
    /// Leading, trailing or doubled `.` in the local part.
    InvalidLocalDot { position: usize },
    InvalidDomainCharacter { position: usize, byte: u8 },
    /// `.` or `-` at the first or last domain position.
    DomainEdge { position: usize },
    ConsecutiveDomainDots { position: usize },
    MissingTld,
    TldTooShort { len: usize },
    TldNotAlphabetic,
}

impl EmailRejection {
    /// Stable machine-readable code for logs and callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooLong { .. } => "email_too_long",
            Self::MissingAt => "email_missing_at",
            Self::EmptyLocalPart => "email_empty_local_part",
            Self::MultipleAt => "email_multiple_at",
            Self::LocalPartTooLong { .. } => "email_local_part_too_long",
            Self::EmptyDomain => "email_empty_domain",
            Self::InvalidLocalCharacter { .. } => "email_invalid_local_character",
            Self::InvalidLocalDot { .. } => "email_invalid_local_dot",
            Self::InvalidDomainCharacter { .. } => "email_invalid_domain_character",
            Self::DomainEdge { .. } => "email_domain_edge",
            Self::ConsecutiveDomainDots { .. } => "email_consecutive_domain_dots",
            Self::MissingTld => "email_missing_tld",
            Self::TldTooShort { .. } => "email_tld_too_short",
            Self::TldNotAlphabetic => "email_tld_not_alphabetic",
        }
    }
}

impl Display for EmailRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong { len } => write!(
                f,
                "email has {len} characters; at most {MAX_EMAIL_LEN} are allowed"
            ),
            Self::MissingAt => write!(f, "email must contain `@`"),
            Self::EmptyLocalPart => write!(f, "email has nothing before `@`"),
            Self::MultipleAt => write!(f, "email must contain exactly one `@`"),
            Self::LocalPartTooLong { len } => write!(
                f,
                "local part has {len} characters; at most {MAX_EMAIL_LOCAL_LEN} are allowed"
            ),
            Self::EmptyDomain => write!(f, "email has nothing after `@`"),
            Self::InvalidLocalCharacter { position, byte } => write!(
                f,
                "character {} at position {position} is not allowed before `@`",
                describe_byte(*byte)
            ),
            Self::InvalidLocalDot { position } => write!(
                f,
                "`.` at position {position} cannot start, end or repeat in the local part"
            ),
            Self::InvalidDomainCharacter { position, byte } => write!(
                f,
                "character {} at domain position {position} is not allowed",
                describe_byte(*byte)
            ),
            Self::DomainEdge { position } => write!(
                f,
                "domain cannot start or end with `.` or `-` (position {position})"
            ),
            Self::ConsecutiveDomainDots { position } => {
                write!(f, "domain repeats `.` at position {position}")
            }
            Self::MissingTld => write!(f, "domain must contain a `.` before the top-level label"),
            Self::TldTooShort { len } => write!(
                f,
                "top-level label has {len} characters; at least {MIN_TLD_LEN} are required"
            ),
            Self::TldNotAlphabetic => write!(f, "top-level label must contain letters only"),
        }
    }
}

impl Error for EmailRejection {}

/// Returns whether `email` is an acceptable email address.
pub fn validate_email(email: &str) -> bool {
    check_email(email).is_ok()
}

/// Validates `email` and reports the first violated rule.
///
/// Positions in rejections are relative to the part they describe: the whole
/// address for local-part errors, the domain for domain errors.
pub fn check_email(email: &str) -> Result<(), EmailRejection> {
    let len = email.len();
    if len > MAX_EMAIL_LEN {
        return Err(EmailRejection::TooLong { len });
    }

    let bytes = email.as_bytes();
    let Some(at) = bytes.iter().position(|&b| b == b'@') else {
        return Err(EmailRejection::MissingAt);
    };
    if at == 0 {
        return Err(EmailRejection::EmptyLocalPart);
    }

    let local = &bytes[..at];
    let domain = &bytes[at + 1..];
    if domain.contains(&b'@') {
        return Err(EmailRejection::MultipleAt);
    }
    if local.len() > MAX_EMAIL_LOCAL_LEN {
        return Err(EmailRejection::LocalPartTooLong { len: local.len() });
    }
    if domain.is_empty() {
        return Err(EmailRejection::EmptyDomain);
    }

    check_local_part(local)?;
    check_domain(domain)?;
    check_tld(domain)
}

fn check_local_part(local: &[u8]) -> Result<(), EmailRejection> {
    let last = local.len() - 1;
    for (position, &byte) in local.iter().enumerate() {
        if !byte.is_ascii_alphanumeric() && !LOCAL_PUNCTUATION.contains(&byte) {
            return Err(EmailRejection::InvalidLocalCharacter { position, byte });
        }
        if byte == b'.'
            && (position == 0 || position == last || local.get(position + 1) == Some(&b'.'))
        {
            return Err(EmailRejection::InvalidLocalDot { position });
        }
    }
    Ok(())
}

fn check_domain(domain: &[u8]) -> Result<(), EmailRejection> {
    let last = domain.len() - 1;
    for (position, &byte) in domain.iter().enumerate() {
        if !byte.is_ascii_alphanumeric() && byte != b'-' && byte != b'.' {
            return Err(EmailRejection::InvalidDomainCharacter { position, byte });
        }
        if byte == b'.' || byte == b'-' {
            if position == 0 || position == last {
                return Err(EmailRejection::DomainEdge { position });
            }
            if byte == b'.' && domain.get(position + 1) == Some(&b'.') {
                return Err(EmailRejection::ConsecutiveDomainDots { position });
            }
        }
    }
    Ok(())
}

fn check_tld(domain: &[u8]) -> Result<(), EmailRejection> {
    let dot = match domain.iter().rposition(|&b| b == b'.') {
        Some(0) | None => return Err(EmailRejection::MissingTld),
        Some(dot) => dot,
    };

    let tld = &domain[dot + 1..];
    if tld.len() < MIN_TLD_LEN {
        return Err(EmailRejection::TldTooShort { len: tld.len() });
    }
    if !tld.iter().all(u8::is_ascii_alphabetic) {
        return Err(EmailRejection::TldNotAlphabetic);
    }
    Ok(())
}
