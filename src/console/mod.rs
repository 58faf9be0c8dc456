//! Line-oriented console front end.
//!
//! Reads menu choices and field values from any `BufRead` and writes
//! prompts and results to any `Write`, so sessions can be scripted in
//! tests. All rules live in the core; this module only collects input,
//! shows messages, and asks the overwrite question.

use crate::directory::{Confirmation, UpsertStatus};
use crate::domain::ContactKey;
use crate::models::{Contact, ContactForm};
use crate::services::PhonebookService;
use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

const MENU: &str = "\n1) Add contact\n2) Search contact\n3) Delete contact\n4) List contacts\n5) Exit";

/// Prompts for the add form, in the order they are asked.
const FORM_LABELS: [&str; 11] = [
    "First Name",
    "Last Name",
    "Country Code",
    "Phone Number",
    "Email",
    "Address",
    "Pincode",
    "District",
    "State",
    "Country",
    "Birthdate (YYYY-MM-DD)",
];

/// Interactive menu over a [`PhonebookService`].
pub struct Console<'a, R, W> {
    service: &'a mut PhonebookService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(service: &'a mut PhonebookService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu until the user picks Exit or input ends.
    ///
    /// Saving is left to the caller.
    pub fn run(mut self) -> Result<()> {
        if let Some(e) = self.service.load_error() {
            writeln!(self.output, "Error loading phonebook: {}", e)?;
            if let Some(backup) = self.service.backup_path() {
                writeln!(
                    self.output,
                    "The unreadable file was copied to {}.",
                    backup.display()
                )?;
            }
        }

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option")? else {
                break;
            };

            match choice.to_ascii_lowercase().as_str() {
                "1" | "add" => self.add_contact()?,
                "2" | "search" => self.search_contact()?,
                "3" | "delete" => self.delete_contact()?,
                "4" | "list" => self.list_contacts()?,
                "5" | "exit" | "quit" => break,
                _ => writeln!(self.output, "Invalid choice: {}", choice)?,
            }
        }

        Ok(())
    }

    /// Print `label`, read one line and trim it. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, question: &str) -> Result<Confirmation> {
        let answer = self.prompt(question)?.unwrap_or_default();
        let granted = matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes");
        Ok(Confirmation::from(granted))
    }

    fn read_form(&mut self) -> Result<Option<ContactForm>> {
        let mut values = Vec::with_capacity(FORM_LABELS.len());
        for label in FORM_LABELS {
            match self.prompt(label)? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }

        let [first_name, last_name, country_code, phone_number, email, address, pincode, district, state, country, birthdate]: [String; 11] =
            values
                .try_into()
                .map_err(|_| anyhow!("form field count mismatch"))?;

        Ok(Some(ContactForm {
            first_name,
            last_name,
            phone_number,
            country_code,
            email,
            address,
            pincode,
            district,
            state,
            country,
            birthdate,
        }))
    }

    fn add_contact(&mut self) -> Result<()> {
        let Some(form) = self.read_form()? else {
            return Ok(());
        };

        let contact = match Contact::build(form) {
            Ok(contact) => contact,
            Err(e) => {
                writeln!(self.output, "Invalid Input: {}", e)?;
                return Ok(());
            }
        };
        let full_name = contact.full_name();

        let status = match self.service.try_insert(contact) {
            Ok(status) => status,
            Err(conflict) => {
                let answer =
                    self.confirm("Contact already exists. Do you want to update it? [y/N]")?;
                self.service.resolve_conflict(conflict, answer)
            }
        };

        match status {
            UpsertStatus::Added => writeln!(self.output, "Contact '{}' added.", full_name)?,
            UpsertStatus::UpdatedWithConfirmation => {
                writeln!(self.output, "Contact '{}' updated.", full_name)?
            }
            UpsertStatus::RejectedNoConfirmation => {
                writeln!(self.output, "Contact '{}' left unchanged.", full_name)?
            }
        }
        self.report_save_error()
    }

    fn search_contact(&mut self) -> Result<()> {
        let Some(search_type) = self.prompt("Search by (name/phone)")? else {
            return Ok(());
        };
        let Some(value) = self.prompt("Search Value")? else {
            return Ok(());
        };

        let directory = self.service.directory();
        let found = match search_type.to_ascii_lowercase().as_str() {
            "name" => directory
                .find_by_name(&value)
                .map(|contact| (None, contact)),
            "phone" => directory
                .find_by_phone(&value)
                .map(|(key, contact)| (Some(key), contact)),
            _ => {
                writeln!(
                    self.output,
                    "Invalid search type. Please choose 'name' or 'phone'."
                )?;
                return Ok(());
            }
        };

        match found {
            Some((key, contact)) => {
                let details = render_details(key, contact);
                write!(self.output, "{}", details)?;
            }
            None => writeln!(self.output, "Contact not found.")?,
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(full_name) = self.prompt("Full Name (First Last)")? else {
            return Ok(());
        };

        match self.service.delete(&full_name) {
            Some(_) => writeln!(self.output, "Contact '{}' deleted.", full_name)?,
            None => writeln!(self.output, "Contact not found.")?,
        }
        self.report_save_error()
    }

    fn list_contacts(&mut self) -> Result<()> {
        let directory = self.service.directory();
        if directory.is_empty() {
            writeln!(self.output, "No contacts to display")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Full Name | Phone Number | Country Code | Email | Address | Birthdate"
        )?;
        for (key, contact) in directory.list_all() {
            writeln!(
                self.output,
                "{} | {} | {} | {} | {} | {}",
                key,
                contact.phone_number,
                contact.country_code,
                contact.email,
                contact.postal_address(),
                contact.birthdate
            )?;
        }
        Ok(())
    }

    fn report_save_error(&mut self) -> Result<()> {
        if let Some(e) = self.service.take_save_error() {
            writeln!(self.output, "Error saving phonebook: {}", e)?;
        }
        Ok(())
    }
}

/// Multi-line detail view. `key` is shown when the lookup was by phone.
fn render_details(key: Option<&ContactKey>, contact: &Contact) -> String {
    let mut out = String::new();
    if let Some(key) = key {
        out.push_str(&format!("Full Name: {}\n", key));
    }
    out.push_str(&format!("First Name: {}\n", contact.first_name));
    out.push_str(&format!("Last Name: {}\n", contact.last_name));
    out.push_str(&format!("Phone number: {}\n", contact.phone_number));
    out.push_str(&format!("Country code: {}\n", contact.country_code));
    out.push_str(&format!("Email: {}\n", contact.email));
    out.push_str(&format!("Address: {}\n", contact.postal_address()));
    out.push_str(&format!("Birthdate: {}\n", contact.birthdate));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_details_with_key() {
        let contact = Contact::build(ContactForm {
            first_name: "Amy".to_string(),
            last_name: "B".to_string(),
            phone_number: "111-111-1111".to_string(),
            country_code: "+1".to_string(),
            email: "amy@example.com".to_string(),
            birthdate: "1990-01-01".to_string(),
            ..Default::default()
        })
        .unwrap();

        let key = contact.key();
        let details = render_details(Some(&key), &contact);
        assert!(details.starts_with("Full Name: Amy B\n"));
        assert!(details.contains("Phone number: 1111111111\n"));
        assert!(details.ends_with("Birthdate: 1990-01-01\n"));

        let details = render_details(None, &contact);
        assert!(details.starts_with("First Name: Amy\n"));
    }
}
