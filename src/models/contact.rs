//! Contact model representing one entry in the phonebook.

use crate::domain::{
    Birthdate, ContactKey, CountryCode, EmailAddress, PhoneNumber, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Raw field values as collected from the user.
///
/// Nothing here is validated. Pass it to [`Contact::build`] to get a
/// `Contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub country_code: String,
    pub email: String,
    pub address: String,
    pub pincode: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub birthdate: String,
}

/// A contact in the phonebook.
///
/// Field order here is the field order of the persisted JSON. The four
/// validated fields use value objects so an invalid contact cannot be
/// represented; the rest are free text and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, normalized to exactly 10 digits
    pub phone_number: PhoneNumber,

    /// Dialing prefix such as `+1`
    pub country_code: CountryCode,

    /// Email address
    pub email: EmailAddress,

    /// Street address
    pub address: String,

    /// Postal code
    pub pincode: String,

    /// District or city
    pub district: String,

    /// State or province
    pub state: String,

    /// Country name
    pub country: String,

    /// Date of birth (`YYYY-MM-DD`)
    pub birthdate: Birthdate,
}

impl Contact {
    /// Build a contact from raw form input.
    ///
    /// Every field is trimmed. The phone number is normalized to digits,
    /// then the validated fields are checked in the order phone, country
    /// code, email, birthdate. The first failure is returned and the rest
    /// are not checked.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first invalid field.
    pub fn build(form: ContactForm) -> Result<Self, ValidationError> {
        let phone_number = PhoneNumber::parse(form.phone_number.trim())?;
        let country_code = CountryCode::parse(form.country_code.trim())?;
        let email = EmailAddress::parse(form.email.trim())?;
        let birthdate = Birthdate::parse(form.birthdate.trim())?;

        Ok(Self {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone_number,
            country_code,
            email,
            address: form.address.trim().to_string(),
            pincode: form.pincode.trim().to_string(),
            district: form.district.trim().to_string(),
            state: form.state.trim().to_string(),
            country: form.country.trim().to_string(),
            birthdate,
        })
    }

    /// The directory key for this contact.
    pub fn key(&self) -> ContactKey {
        ContactKey::from_names(&self.first_name, &self.last_name)
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Postal address on one line: address, district, state, pincode, country.
    pub fn postal_address(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.address, self.district, self.state, self.pincode, self.country
        )
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone_number: contact.phone_number.to_string(),
            country_code: contact.country_code.to_string(),
            email: contact.email.to_string(),
            address: contact.address.clone(),
            pincode: contact.pincode.clone(),
            district: contact.district.clone(),
            state: contact.state.clone(),
            country: contact.country.clone(),
            birthdate: contact.birthdate.to_string(),
        }
    }
}
