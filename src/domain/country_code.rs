//! CountryCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static COUNTRY_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]+$").expect("Failed to compile country code regex"));

/// Returns true if `raw` is `+` followed by one or more ASCII digits.
pub fn validate_country_code(raw: &str) -> bool {
    COUNTRY_CODE_REGEX.is_match(raw)
}

/// An international dialing prefix such as `+1` or `+44`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCountryCode` if `raw` is not `+<digits>`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !validate_country_code(raw) {
            return Err(ValidationError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CountryCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
