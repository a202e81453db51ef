//! Interactive menu session.
//!
//! # Responsibility
//! - Drive add/list/search/delete/edit flows over any reader/writer pair.
//! - Translate validation rejections into user-facing rule messages.
//!
//! # Invariants
//! - Raw replies reach the validators untransformed (line ending stripped only).
//! - End of input at any prompt ends the session without error.
//! - A cancelled or rejected flow leaves the directory unchanged.

use crate::prompt::{Prompter, Reply};
use crate::render::{write_header, write_row, write_table};
use contactbook_core::validate::is_blank;
use contactbook_core::{
    ContactDraft, ContactField, ContactId, ContactRepository, ContactService,
    ContactValidationError, ListOrder, RepoError, SearchField,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Search,
    Delete,
    Edit,
    Exit,
}

impl MenuChoice {
    fn from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Search),
            4 => Some(Self::Delete),
            5 => Some(Self::Edit),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

const MENU: &str = "\n=== MAIN MENU ===
1. Add Contact
2. List All Contacts
3. Search Contacts
4. Delete Contact
5. Edit Contact
6. Exit";

/// One interactive directory session.
pub struct Session<R, W, Repo: ContactRepository> {
    prompter: Prompter<R, W>,
    service: ContactService<Repo>,
}

impl<R: BufRead, W: Write, Repo: ContactRepository> Session<R, W, Repo> {
    pub fn new(input: R, output: W, service: ContactService<Repo>) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            service,
        }
    }

    /// Ends the session, handing back the service and the output writer.
    pub fn into_parts(self) -> (ContactService<Repo>, W) {
        (self.service, self.prompter.into_output())
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=cli status=ok");
        writeln!(self.prompter.out(), "=== CONTACT DIRECTORY ===")?;

        loop {
            writeln!(self.prompter.out(), "{MENU}")?;
            let choice = self
                .prompter
                .ask_choice("Enter choice (1-6): ", MenuChoice::from_number)?;
            let flow = match choice {
                Reply::Value(MenuChoice::Add) => self.add_contact()?,
                Reply::Value(MenuChoice::List) => self.list_contacts()?,
                Reply::Value(MenuChoice::Search) => self.search_contacts()?,
                Reply::Value(MenuChoice::Delete) => self.delete_contact()?,
                Reply::Value(MenuChoice::Edit) => self.edit_contact()?,
                Reply::Value(MenuChoice::Exit) => Flow::Exit,
                Reply::Invalid => {
                    writeln!(
                        self.prompter.out(),
                        "\nInvalid input! Please enter a number 1-6."
                    )?;
                    Flow::Continue
                }
                Reply::Closed => Flow::Exit,
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.prompter.out(), "\nExiting contact directory...")?;
        info!(
            "event=session_end module=cli status=ok contacts={}",
            self.service.len()
        );
        Ok(())
    }

    fn add_contact(&mut self) -> io::Result<Flow> {
        if self.service.is_full() {
            writeln!(
                self.prompter.out(),
                "Directory is full. Delete contacts to add more."
            )?;
            return Ok(Flow::Continue);
        }

        writeln!(self.prompter.out(), "\n=== ADD NEW CONTACT ===")?;
        let mut draft = ContactDraft::default();
        for field in ContactField::ALL {
            let value = match self.ask_valid_field(field)? {
                Reply::Value(value) => value,
                Reply::Invalid => return Ok(Flow::Continue),
                Reply::Closed => return Ok(Flow::Exit),
            };
            match field {
                ContactField::Name => draft.name = value,
                ContactField::Phone => draft.phone = value,
                ContactField::Email => draft.email = value,
            }
        }

        match self.service.add_contact(&draft) {
            Ok(contact) => {
                writeln!(
                    self.prompter.out(),
                    "\nContact '{}' added with ID {}.\nContacts in directory: {}",
                    contact.name,
                    contact.id,
                    self.service.len()
                )?;
            }
            Err(err) => {
                writeln!(self.prompter.out(), "\nContact could not be added: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Reads one field value; a rejection is reported and yields `Invalid`.
    fn ask_valid_field(&mut self, field: ContactField) -> io::Result<Reply<String>> {
        let value = match self.prompter.ask_line(field_prompt(field))? {
            Reply::Value(value) => value,
            Reply::Invalid | Reply::Closed => return Ok(Reply::Closed),
        };
        if let Err(err) = field.check(&value) {
            warn!(
                "event=contact_add module=cli status=rejected field={field} reason={}",
                err.code()
            );
            self.report_rejection(&err, &value)?;
            return Ok(Reply::Invalid);
        }
        Ok(Reply::Value(value))
    }

    fn list_contacts(&mut self) -> io::Result<Flow> {
        let count = self.service.len();
        writeln!(self.prompter.out(), "\n=== ALL CONTACTS ({count}) ===")?;

        let order = if count > 1 {
            let prompt = "1. ID (ascending)\n2. Name (alphabetical)\n3. No sorting (default)\nEnter choice: ";
            match self.prompter.ask_int(prompt, 1..=3)? {
                Reply::Value(1) => ListOrder::IdAscending,
                Reply::Value(2) => ListOrder::NameAscending,
                Reply::Value(_) => ListOrder::Insertion,
                Reply::Invalid => {
                    writeln!(
                        self.prompter.out(),
                        "Invalid choice. Listing in default order."
                    )?;
                    ListOrder::Insertion
                }
                Reply::Closed => return Ok(Flow::Exit),
            }
        } else {
            ListOrder::Insertion
        };

        let contacts = self.service.list_contacts(order);
        write_table(self.prompter.out(), &contacts)?;
        writeln!(self.prompter.out(), "Total: {count} contact(s)")?;
        Ok(Flow::Continue)
    }

    fn search_contacts(&mut self) -> io::Result<Flow> {
        writeln!(self.prompter.out(), "\n=== SEARCH CONTACTS ===")?;
        let prompt = "1 - Search By ID\n2 - Search By Name\n3 - Search By Phone\n4 - Search By E-mail\n5 - Back\nEnter choice: ";
        let field = match self.prompter.ask_int(prompt, 1..=5)? {
            Reply::Value(1) => return self.search_by_id(),
            Reply::Value(2) => SearchField::Name,
            Reply::Value(3) => SearchField::Phone,
            Reply::Value(4) => SearchField::Email,
            Reply::Value(_) => {
                writeln!(self.prompter.out(), "Returning to main menu...")?;
                return Ok(Flow::Continue);
            }
            Reply::Invalid => {
                writeln!(
                    self.prompter.out(),
                    "Invalid choice. Returning to main menu."
                )?;
                return Ok(Flow::Continue);
            }
            Reply::Closed => return Ok(Flow::Exit),
        };

        let label = search_label(field);
        let term = match self.prompter.ask_line(&format!("Enter {label}: "))? {
            Reply::Value(term) => term,
            Reply::Invalid | Reply::Closed => return Ok(Flow::Exit),
        };
        if is_blank(&term) {
            writeln!(
                self.prompter.out(),
                "Invalid {label} entered. Returning to main menu."
            )?;
            return Ok(Flow::Continue);
        }

        let hits = self.service.search(field, &term);
        if hits.is_empty() {
            writeln!(
                self.prompter.out(),
                "No contact with {label} matching '{term}' exists in the directory."
            )?;
            return Ok(Flow::Continue);
        }

        writeln!(self.prompter.out(), "Found {} contact(s)", hits.len())?;
        write_table(self.prompter.out(), &hits)?;
        Ok(Flow::Continue)
    }

    fn search_by_id(&mut self) -> io::Result<Flow> {
        let id = match self.ask_id("Enter ID: ")? {
            Reply::Value(id) => id,
            Reply::Invalid => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Exit),
        };

        match self.service.find_by_id(id) {
            Some(contact) => {
                writeln!(self.prompter.out(), "Found 1 contact(s)")?;
                write_table(self.prompter.out(), &[contact])?;
            }
            None => writeln!(
                self.prompter.out(),
                "No contact with ID {id} exists in the directory."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> io::Result<Flow> {
        writeln!(self.prompter.out(), "\n=== DELETE CONTACT ===")?;
        let id = match self.select_contact("Enter ID to delete: ", "Delete this contact?")? {
            Reply::Value(id) => id,
            Reply::Invalid => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Exit),
        };

        match self.prompter.ask_yes_no("\nAre you sure? (Y/N): ")? {
            Reply::Value(true) => match self.service.remove_contact(id) {
                Ok(_) => writeln!(
                    self.prompter.out(),
                    "Contact deleted.\nContacts remaining in directory: {}",
                    self.service.len()
                )?,
                Err(err) => writeln!(
                    self.prompter.out(),
                    "Deletion failed: {err}. Directory left unchanged."
                )?,
            },
            Reply::Value(false) => writeln!(
                self.prompter.out(),
                "Deletion cancelled. Directory left unchanged."
            )?,
            Reply::Invalid => writeln!(
                self.prompter.out(),
                "Please enter only Y/N. Directory left unchanged."
            )?,
            Reply::Closed => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn edit_contact(&mut self) -> io::Result<Flow> {
        writeln!(self.prompter.out(), "\n=== EDIT CONTACT ===")?;
        let id = match self.select_contact("Enter ID to modify: ", "Modify this contact?")? {
            Reply::Value(id) => id,
            Reply::Invalid => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Exit),
        };

        match self.prompter.ask_yes_no("\nAre you sure? (Y/N): ")? {
            Reply::Value(true) => {}
            Reply::Value(false) => {
                writeln!(
                    self.prompter.out(),
                    "Update cancelled. Directory left unchanged."
                )?;
                return Ok(Flow::Continue);
            }
            Reply::Invalid => {
                writeln!(
                    self.prompter.out(),
                    "Please enter only Y/N. Directory left unchanged."
                )?;
                return Ok(Flow::Continue);
            }
            Reply::Closed => return Ok(Flow::Exit),
        }

        let prompt = "Which field to modify?\n1 - Name\n2 - Phone\n3 - E-mail\nEnter choice: ";
        let field = match self.prompter.ask_int(prompt, 1..=3)? {
            Reply::Value(1) => ContactField::Name,
            Reply::Value(2) => ContactField::Phone,
            Reply::Value(_) => ContactField::Email,
            Reply::Invalid => {
                writeln!(self.prompter.out(), "Invalid choice. Update cancelled.")?;
                return Ok(Flow::Continue);
            }
            Reply::Closed => return Ok(Flow::Exit),
        };

        let value = match self.prompter.ask_line(&format!("Enter new {field}: "))? {
            Reply::Value(value) => value,
            Reply::Invalid | Reply::Closed => return Ok(Flow::Exit),
        };

        match self.service.edit_field(id, field, value.clone()) {
            Ok(change) => writeln!(
                self.prompter.out(),
                "\nContact updated. (Field updated: {})\nOLD: {}\nNEW: {}",
                change.field,
                change.old,
                change.new
            )?,
            Err(RepoError::Validation(err)) => {
                self.report_rejection(&err, &value)?;
                writeln!(self.prompter.out(), "Update cancelled.")?;
            }
            Err(err) => writeln!(self.prompter.out(), "Update failed: {err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Asks for an id of an existing contact and shows it.
    ///
    /// Unknown or malformed ids are reported and yield `Invalid`.
    fn select_contact(&mut self, prompt: &str, confirm_title: &str) -> io::Result<Reply<ContactId>> {
        let id = match self.ask_id(prompt)? {
            Reply::Value(id) => id,
            other => return Ok(other),
        };

        let Some(contact) = self.service.find_by_id(id) else {
            writeln!(self.prompter.out(), "Contact with ID {id} not found.")?;
            return Ok(Reply::Invalid);
        };

        writeln!(self.prompter.out(), "{confirm_title}")?;
        write_header(self.prompter.out())?;
        write_row(self.prompter.out(), &contact)?;
        Ok(Reply::Value(id))
    }

    /// Reads a positive contact id; malformed input is reported.
    fn ask_id(&mut self, prompt: &str) -> io::Result<Reply<ContactId>> {
        let reply = self.prompter.ask_choice(prompt, |value| {
            ContactId::try_from(value).ok().filter(|id| *id > 0)
        })?;
        if reply == Reply::Invalid {
            writeln!(
                self.prompter.out(),
                "Invalid ID entered. Returning to main menu."
            )?;
        }
        Ok(reply)
    }

    fn report_rejection(&mut self, err: &ContactValidationError, value: &str) -> io::Result<()> {
        let rule = match err.field() {
            Some(field) => field_rule(field),
            None => "",
        };
        writeln!(self.prompter.out(), "\n{err}.")?;
        if !rule.is_empty() {
            writeln!(self.prompter.out(), "{rule}")?;
        }
        writeln!(self.prompter.out(), "You entered: '{value}'")
    }
}

fn field_prompt(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name: ",
        ContactField::Phone => "Phone Number: ",
        ContactField::Email => "E-mail: ",
    }
}

fn search_label(field: SearchField) -> &'static str {
    match field {
        SearchField::Name => "name",
        SearchField::Phone => "phone",
        SearchField::Email => "e-mail",
    }
}

fn field_rule(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => {
            "Name must be 2-49 characters, contain at least one letter, have no digit before the first letter, and use only letters, digits, spaces, hyphens, periods or apostrophes."
        }
        ContactField::Phone => {
            "Phone number must have 7-15 digits, balanced parentheses, at most one '+' at the very start, and no separator at either end or next to another separator."
        }
        ContactField::Email => {
            "E-mail must have exactly one '@', a local part of at most 64 characters without leading, trailing or doubled dots, and a domain ending in a label of two or more letters."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use contactbook_core::{ContactRepository, ContactService, InMemoryContactRepository};
    use std::io::Cursor;

    fn run_script(
        script: &str,
        repo: InMemoryContactRepository,
    ) -> (ContactService<InMemoryContactRepository>, String) {
        let input = Cursor::new(script.to_string());
        let mut session = Session::new(input, Vec::new(), ContactService::new(repo));
        session.run().unwrap();
        let (service, output) = session.into_parts();
        (service, String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_then_exit() {
        let script = "1\nAda Lovelace\n(555) 123-4567\nada@example.com\n6\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert_eq!(service.len(), 1);
        let ada = service.find_by_id(1).unwrap();
        assert_eq!(ada.phone, "(555) 123-4567");
        assert!(output.contains("Contact 'Ada Lovelace' added with ID 1."));
        assert!(output.contains("Exiting contact directory..."));
    }

    #[test]
    fn add_stops_at_first_invalid_field() {
        let script = "1\n123John\n6\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert!(service.is_empty());
        assert!(output.contains("invalid name: digit at position 0 appears before any letter."));
        assert!(output.contains("You entered: '123John'"));
        assert!(!output.contains("Phone Number: "));
    }

    #[test]
    fn add_refused_when_directory_full() {
        let script = "1\nAda\n5551234567\nada@example.com\n1\n6\n";
        let (service, output) =
            run_script(script, InMemoryContactRepository::with_capacity_limit(1));

        assert_eq!(service.len(), 1);
        assert!(output.contains("Directory is full."));
    }

    #[test]
    fn list_asks_for_order_when_more_than_one() {
        let script = "1\nZed\n5551234567\nz@example.com\n\
                      1\nAmy\n5557654321\na@example.com\n\
                      2\n2\n6\n";
        let (_, output) = run_script(script, InMemoryContactRepository::new());

        let listing = &output[output.find("=== ALL CONTACTS (2) ===").unwrap()..];
        let amy = listing.find("| Amy").unwrap();
        let zed = listing.find("| Zed").unwrap();
        assert!(amy < zed);
        assert!(listing.contains("Total: 2 contact(s)"));
    }

    #[test]
    fn search_by_phone_ignores_formatting() {
        let script = "1\nAda\n(555) 123-4567\nada@example.com\n\
                      3\n3\n555.123\n\
                      3\n2\n   \n6\n";
        let (_, output) = run_script(script, InMemoryContactRepository::new());

        assert!(output.contains("Found 1 contact(s)"));
        assert!(output.contains("Invalid name entered."));
    }

    #[test]
    fn delete_requires_confirmation() {
        let script = "1\nAda\n5551234567\nada@example.com\n\
                      4\n1\nn\n\
                      4\n1\ny\n6\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert!(output.contains("Deletion cancelled."));
        assert!(output.contains("Contacts remaining in directory: 0"));
        assert!(service.is_empty());
    }

    #[test]
    fn edit_validates_only_the_new_value() {
        let script = "1\nAda\n5551234567\nada@example.com\n\
                      5\n1\ny\n3\nbad@@example.com\n\
                      5\n1\ny\n3\nada@lovelace.org\n6\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert!(output.contains("invalid email: email must contain exactly one `@`."));
        assert!(output.contains("OLD: ada@example.com\nNEW: ada@lovelace.org"));
        assert_eq!(service.find_by_id(1).unwrap().email, "ada@lovelace.org");
    }

    #[test]
    fn unknown_id_and_bad_menu_input_are_reported() {
        let script = "9\nabc\n4\n7\n5\n0\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert!(service.repository().is_empty());
        assert!(output.contains("Invalid input! Please enter a number 1-6."));
        assert!(output.contains("Contact with ID 7 not found."));
        assert!(output.contains("Invalid ID entered."));
    }

    #[test]
    fn end_of_input_mid_flow_exits_cleanly() {
        let (service, output) = run_script("1\nAda\n", InMemoryContactRepository::new());
        assert!(service.is_empty());
        assert!(output.ends_with("Exiting contact directory...\n"));
    }

    #[test]
    fn id_prompts_reject_out_of_range_and_stop_at_end_of_input() {
        let script = "1\nAda\n5551234567\nada@example.com\n\
                      5\n4294967296\n\
                      4\n-1\n\
                      4\n1\n";
        let (service, output) = run_script(script, InMemoryContactRepository::new());

        assert_eq!(output.matches("Invalid ID entered.").count(), 2);
        assert!(output.contains("Delete this contact?"));
        assert!(output.ends_with("Exiting contact directory...\n"));
        assert_eq!(service.len(), 1);
    }
}
