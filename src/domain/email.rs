//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Returns true if `raw` has a `local-part@domain.tld` shape.
///
/// This is a syntactic check only. The final label must be at least two
/// ASCII letters.
pub fn validate_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

/// A syntactically valid email address.
///
/// # Example
///
/// ```
/// use phonebook::domain::EmailAddress;
///
/// let email = EmailAddress::parse("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the format is invalid.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !validate_email(raw) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
