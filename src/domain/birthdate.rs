//! Birthdate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono format string for stored birthdates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts single-digit months and days, so the shape is checked first.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex")
});

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_REGEX.is_match(raw) {
        return None;
    }
    // Years start at 0001.
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Returns true if `raw` is a real calendar date in exact `YYYY-MM-DD` form.
pub fn validate_date(raw: &str) -> bool {
    parse_date(raw).is_some()
}

/// A contact's date of birth, stored and rendered as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use phonebook::domain::Birthdate;
///
/// let date = Birthdate::parse("2024-02-29").unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Parse `raw` as a `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdate` for any other shape or an
    /// impossible date such as `2023-02-29`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        parse_date(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthdate(raw.to_string()))
    }
}

impl Serialize for Birthdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Birthdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthdate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
