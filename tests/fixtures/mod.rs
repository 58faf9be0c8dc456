//! Test fixtures and sample data.
//!
//! Reusable form input and contacts for the integration tests.

use phonebook::{Contact, ContactForm};

/// Create a complete, valid form for the given name and phone.
#[allow(dead_code)]
pub fn sample_form(first_name: &str, last_name: &str, phone: &str) -> ContactForm {
    ContactForm {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone_number: phone.to_string(),
        country_code: "+1".to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        address: "1 Main Street".to_string(),
        pincode: "10001".to_string(),
        district: "Manhattan".to_string(),
        state: "NY".to_string(),
        country: "USA".to_string(),
        birthdate: "1990-05-17".to_string(),
    }
}

/// Build a valid contact for the given name and phone.
#[allow(dead_code)]
pub fn sample_contact(first_name: &str, last_name: &str, phone: &str) -> Contact {
    Contact::build(sample_form(first_name, last_name, phone)).expect("fixture must be valid")
}
