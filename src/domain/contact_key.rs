//! ContactKey value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// The directory key of a contact: first and last name joined by one space.
///
/// Keys are compared byte-wise, which gives the listing order. No case
/// folding or trimming is applied; `"amy b"` and `"Amy B"` are different
/// keys.
///
/// # Example
///
/// ```
/// use phonebook::domain::ContactKey;
///
/// let key = ContactKey::from_names("Ada", "Lovelace");
/// assert_eq!(key.as_str(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactKey(String);

impl ContactKey {
    /// Build the key for a first and last name.
    pub fn from_names(first_name: &str, last_name: &str) -> Self {
        Self(format!("{} {}", first_name, last_name))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactKey {
    fn from(full_name: &str) -> Self {
        Self(full_name.to_string())
    }
}

impl From<String> for ContactKey {
    fn from(full_name: String) -> Self {
        Self(full_name)
    }
}

// Lets `BTreeMap<ContactKey, _>` be queried with a plain `&str`.
impl Borrow<str> for ContactKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
