//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a stored phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Strip every non-digit character from `raw`.
///
/// ```
/// use phonebook::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("(123) 456-7890"), "1234567890");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if `raw` normalizes to exactly 10 digits.
pub fn validate_phone(raw: &str) -> bool {
    normalize_phone(raw).len() == PHONE_DIGITS
}

/// A normalized phone number: exactly 10 ASCII digits, no formatting.
///
/// # Example
///
/// ```
/// use phonebook::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize `raw` to digits and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` with the raw input if the
    /// normalized value is not exactly 10 digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let digits = normalize_phone(raw);
        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(digits))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Stored values must already be normalized; formatted numbers are rejected.
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.len() != PHONE_DIGITS || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(serde::de::Error::custom(ValidationError::InvalidPhone(s)));
        }
        Ok(Self(s))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
