//! Field validation errors.

use std::fmt;

/// Errors raised when a raw field value fails validation.
///
/// Each variant carries the rejected input. `Display` produces the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number does not normalize to exactly 10 digits.
    InvalidPhone(String),

    /// The country code is not `+` followed by digits.
    InvalidCountryCode(String),

    /// The email address does not have a `local@domain.tld` shape.
    InvalidEmail(String),

    /// The birthdate is not a real `YYYY-MM-DD` calendar date.
    InvalidBirthdate(String),
}

impl ValidationError {
    /// The rejected input value.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(v)
            | Self::InvalidCountryCode(v)
            | Self::InvalidEmail(v)
            | Self::InvalidBirthdate(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => {
                write!(f, "Invalid phone number format. Please enter 10 digits.")
            }
            Self::InvalidCountryCode(_) => write!(
                f,
                "Invalid country code format. Please enter a valid code (e.g., +1)."
            ),
            Self::InvalidEmail(_) => write!(f, "Invalid email format."),
            Self::InvalidBirthdate(_) => write!(
                f,
                "Invalid birthdate format. Please enter in YYYY-MM-DD format."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
