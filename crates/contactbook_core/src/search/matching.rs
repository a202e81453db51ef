//! Per-field contact match predicates.
//!
//! # Invariants
//! - Name and email matching is ASCII case-insensitive substring search.
//! - An empty name/email term never matches.
//! - Phone matching compares digit-only projections, so formatting is ignored.

use crate::model::contact::Contact;

/// Maximum number of digits kept by [`extract_digits`].
pub const DIGIT_EXTRACT_CAP: usize = 19;

/// Returns whether `term` occurs in the contact name, ignoring ASCII case.
pub fn name_matches(contact: &Contact, term: &str) -> bool {
    contains_ignore_ascii_case(&contact.name, term)
}

/// Returns whether `term` occurs in the contact email, ignoring ASCII case.
pub fn email_matches(contact: &Contact, term: &str) -> bool {
    contains_ignore_ascii_case(&contact.email, term)
}

/// Returns whether the digits of `term` occur in the digits of the contact phone.
///
/// A term without digits projects to an empty sequence, which matches every
/// phone number.
pub fn phone_matches(contact: &Contact, term: &str) -> bool {
    let stored = extract_digits(&contact.phone);
    let wanted = extract_digits(term);
    stored.contains(wanted.as_str())
}

/// Returns the ASCII digits of `text` in order, truncated to
/// [`DIGIT_EXTRACT_CAP`] digits.
pub fn extract_digits(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(DIGIT_EXTRACT_CAP)
        .collect()
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
