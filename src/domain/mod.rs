//! Domain value objects and field validators.
//!
//! The validator functions are pure predicates over trimmed raw strings.
//! The value objects wrap a validated value, so a constructed `Contact`
//! can never carry an invalid phone number, country code, email, or
//! birthdate.

pub mod birthdate;
pub mod contact_key;
pub mod country_code;
pub mod email;
pub mod errors;
pub mod phone;

pub use birthdate::{validate_date, Birthdate};
pub use contact_key::ContactKey;
pub use country_code::{validate_country_code, CountryCode};
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use phone::{normalize_phone, validate_phone, PhoneNumber};
