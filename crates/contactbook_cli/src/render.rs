//! Fixed-width contact table rendering.

use contactbook_core::Contact;
use std::io::{self, Write};

const RULE: &str =
    "|------|----------------------|-----------------|--------------------------------|";

pub fn write_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "| {:<4} | {:<20} | {:<15} | {:<30} |",
        "ID", "Name", "Phone", "Email"
    )?;
    writeln!(out, "{RULE}")
}

pub fn write_row(out: &mut impl Write, contact: &Contact) -> io::Result<()> {
    writeln!(
        out,
        "| {:<4} | {:<20} | {:<15} | {:<30} |",
        contact.id, contact.name, contact.phone, contact.email
    )?;
    writeln!(out, "{RULE}")
}

/// Writes a header plus one row per contact, or a placeholder when empty.
pub fn write_table(out: &mut impl Write, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return writeln!(out, "No contacts found.");
    }
    write_header(out)?;
    for contact in contacts {
        write_row(out, contact)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_table;
    use contactbook_core::ContactDraft;

    #[test]
    fn table_pads_columns() {
        let contact = ContactDraft::new("Ada", "5551234567", "ada@example.com")
            .into_contact(1)
            .unwrap();
        let mut out = Vec::new();
        write_table(&mut out, &[contact]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(
            "| 1    | Ada                  | 5551234567      | ada@example.com                |"
        ));
    }

    #[test]
    fn empty_table_prints_placeholder() {
        let mut out = Vec::new();
        write_table(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No contacts found.\n");
    }
}
