//! Contact phone number validation.
//!
//! # Responsibility
//! - Decide whether free-form phone text is well formed in one left-to-right scan.
//!
//! # Invariants
//! - Only digits, `+`, `(`, `)`, `-`, space and `.` are accepted.
//! - `+` may only appear once, as the first character.
//! - Parentheses balance and a `)` is followed by end, space, `-` or a digit.
//! - Separators never start, end, or double up.
//! - The number carries 7..=15 digits.

use super::classify::{describe_byte, is_blank};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;
/// Maximum number of digits in a phone number.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Reason a phone number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRejection {
    Blank,
    /// `+` anywhere but the first position, or more than once.
    MisplacedPlus { position: usize },
    /// A `)` without a matching `(`, or a `(` left open.
    UnbalancedParentheses,
    InvalidAfterClosingParen { position: usize },
    SeparatorAtEdge { position: usize },
    ConsecutiveSeparators { position: usize },
    InvalidCharacter { position: usize, byte: u8 },
    TooFewDigits { count: usize },
    TooManyDigits { count: usize },
}

impl PhoneRejection {
    /// Stable machine-readable code for logs and callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blank => "phone_blank",
            Self::MisplacedPlus { .. } => "phone_misplaced_plus",
            Self::UnbalancedParentheses => "phone_unbalanced_parentheses",
            Self::InvalidAfterClosingParen { .. } => "phone_invalid_after_closing_paren",
            Self::SeparatorAtEdge { .. } => "phone_separator_at_edge",
            Self::ConsecutiveSeparators { .. } => "phone_consecutive_separators",
            Self::InvalidCharacter { .. } => "phone_invalid_character",
            Self::TooFewDigits { .. } => "phone_too_few_digits",
            Self::TooManyDigits { .. } => "phone_too_many_digits",
        }
    }
}

impl Display for PhoneRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "phone number cannot be blank"),
            Self::MisplacedPlus { position } => write!(
                f,
                "`+` at position {position}; only one leading `+` is allowed"
            ),
            Self::UnbalancedParentheses => write!(f, "parentheses are not balanced"),
            Self::InvalidAfterClosingParen { position } => write!(
                f,
                "`)` at position {position} must be followed by a digit, space, `-` or the end"
            ),
            Self::SeparatorAtEdge { position } => write!(
                f,
                "separator at position {position} cannot start or end the number"
            ),
            Self::ConsecutiveSeparators { position } => {
                write!(f, "separators repeat at position {position}")
            }
            Self::InvalidCharacter { position, byte } => write!(
                f,
                "character {} at position {position} is not allowed in a phone number",
                describe_byte(*byte)
            ),
            Self::TooFewDigits { count } => write!(
                f,
                "phone number has {count} digits; at least {MIN_PHONE_DIGITS} are required"
            ),
            Self::TooManyDigits { count } => write!(
                f,
                "phone number has {count} digits; at most {MAX_PHONE_DIGITS} are allowed"
            ),
        }
    }
}

impl Error for PhoneRejection {}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b'-' | b' ' | b'.')
}

/// Returns whether `phone` is an acceptable phone number.
pub fn validate_phone(phone: &str) -> bool {
    check_phone(phone).is_ok()
}

/// Validates `phone` and reports the first violated rule.
pub fn check_phone(phone: &str) -> Result<(), PhoneRejection> {
    if is_blank(phone) {
        return Err(PhoneRejection::Blank);
    }

    let bytes = phone.as_bytes();
    let mut digit_count = 0usize;
    let mut plus_count = 0usize;
    let mut depth = 0isize;

    for (position, &byte) in bytes.iter().enumerate() {
        let next = bytes.get(position + 1).copied();
        match byte {
            b'0'..=b'9' => digit_count += 1,
            b'+' => {
                plus_count += 1;
                if position != 0 || plus_count > 1 {
                    return Err(PhoneRejection::MisplacedPlus { position });
                }
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if let Some(follow) = next {
                    if follow != b' ' && follow != b'-' && !follow.is_ascii_digit() {
                        return Err(PhoneRejection::InvalidAfterClosingParen { position });
                    }
                }
                if depth < 0 {
                    return Err(PhoneRejection::UnbalancedParentheses);
                }
            }
            b if is_separator(b) => {
                if position == 0 || next.is_none() {
                    return Err(PhoneRejection::SeparatorAtEdge { position });
                }
                if next.is_some_and(is_separator) {
                    return Err(PhoneRejection::ConsecutiveSeparators { position });
                }
            }
            _ => return Err(PhoneRejection::InvalidCharacter { position, byte }),
        }
    }

    if depth != 0 {
        return Err(PhoneRejection::UnbalancedParentheses);
    }
    if digit_count < MIN_PHONE_DIGITS {
        return Err(PhoneRejection::TooFewDigits { count: digit_count });
    }
    if digit_count > MAX_PHONE_DIGITS {
        return Err(PhoneRejection::TooManyDigits { count: digit_count });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_phone, validate_phone, PhoneRejection};

    #[test]
    fn leading_plus_is_the_only_plus() {
        assert!(validate_phone("+1-555-123-4567"));
        assert_eq!(
            check_phone("1+555"),
            Err(PhoneRejection::MisplacedPlus { position: 1 })
        );
        assert_eq!(
            check_phone("++15551234567"),
            Err(PhoneRejection::MisplacedPlus { position: 1 })
        );
    }

    #[test]
    fn closing_paren_follow_set() {
        assert!(validate_phone("(555)123-4567"));
        assert!(validate_phone("(555)-123-4567"));
        assert!(validate_phone("555 123 (4567)"));
        assert_eq!(
            check_phone("(555).123.4567"),
            Err(PhoneRejection::InvalidAfterClosingParen { position: 4 })
        );
        assert_eq!(
            check_phone("(555)(123)4567"),
            Err(PhoneRejection::InvalidAfterClosingParen { position: 4 })
        );
    }

    #[test]
    fn closing_paren_without_open_is_rejected() {
        assert_eq!(
            check_phone("555)1234567"),
            Err(PhoneRejection::UnbalancedParentheses)
        );
    }

    #[test]
    fn separators_cannot_touch_edges_or_each_other() {
        assert_eq!(
            check_phone("-5551234567"),
            Err(PhoneRejection::SeparatorAtEdge { position: 0 })
        );
        assert_eq!(
            check_phone("5551234567."),
            Err(PhoneRejection::SeparatorAtEdge { position: 10 })
        );
        assert_eq!(
            check_phone("555 -1234567"),
            Err(PhoneRejection::ConsecutiveSeparators { position: 3 })
        );
        assert!(validate_phone("555.123.4567"));
    }

    #[test]
    fn unrecognized_characters_are_rejected() {
        assert_eq!(
            check_phone("555-CALL-NOW1234"),
            Err(PhoneRejection::InvalidCharacter {
                position: 4,
                byte: b'C'
            })
        );
    }

    #[test]
    fn digit_count_bounds_are_inclusive() {
        assert!(validate_phone("1234567"));
        assert!(validate_phone(&"9".repeat(15)));
        assert_eq!(
            check_phone(&"9".repeat(16)),
            Err(PhoneRejection::TooManyDigits { count: 16 })
        );
        assert_eq!(
            check_phone("123456"),
            Err(PhoneRejection::TooFewDigits { count: 6 })
        );
    }
}
