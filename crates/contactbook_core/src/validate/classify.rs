//! C-locale byte classification shared by the field validators.
//!
//! Bytes >= 0x80 are never letters, digits or whitespace.

/// Returns whether `byte` is C-locale whitespace (`isspace`).
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab (`0x0B`) counts.
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns whether `text` is empty or made of whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.bytes().all(is_space)
}

/// Formats a rejected byte for diagnostics without assuming valid UTF-8 context.
pub(crate) fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("`{}`", char::from(byte))
    } else {
        format!("0x{byte:02X}")
    }
}
