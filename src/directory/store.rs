//! Keyed contact store.

use crate::domain::{normalize_phone, ContactKey};
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The caller's answer to "Contact already exists. Do you want to update it?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Denied,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Granted
        } else {
            Confirmation::Denied
        }
    }
}

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStatus {
    /// The key was free and the contact was inserted.
    Added,
    /// The key existed and the caller confirmed the overwrite.
    UpdatedWithConfirmation,
    /// The key existed and the caller declined; the stored contact is unchanged.
    RejectedNoConfirmation,
}

/// A contact whose key is already taken.
///
/// Returned by [`Directory::try_insert`]. Hand it back to
/// [`Directory::resolve_conflict`] once the user has decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    key: ContactKey,
    incoming: Contact,
}

impl Conflict {
    pub fn key(&self) -> &ContactKey {
        &self.key
    }

    /// The contact that would replace the stored one.
    pub fn incoming(&self) -> &Contact {
        &self.incoming
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact '{}' already exists", self.key)
    }
}

impl std::error::Error for Conflict {}

/// All contacts, keyed by full name and kept in ascending key order.
///
/// Serializes as a JSON object mapping each key to its contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    entries: BTreeMap<ContactKey, Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a contact is stored under `full_name`.
    pub fn contains(&self, full_name: &str) -> bool {
        self.entries.contains_key(full_name)
    }

    /// Insert `contact`, overwriting an existing entry only if `confirmation`
    /// is `Granted`.
    ///
    /// The confirmation is ignored when the key is free.
    pub fn upsert(&mut self, contact: Contact, confirmation: Confirmation) -> UpsertStatus {
        match self.try_insert(contact) {
            Ok(status) => status,
            Err(conflict) => self.resolve_conflict(conflict, confirmation),
        }
    }

    /// Insert `contact` if its key is free.
    ///
    /// # Errors
    ///
    /// Returns a [`Conflict`] holding the contact when the key is already
    /// taken. The directory is left unchanged.
    pub fn try_insert(&mut self, contact: Contact) -> Result<UpsertStatus, Conflict> {
        let key = contact.key();
        if self.entries.contains_key(&key) {
            tracing::debug!("Key conflict for contact: {}", key);
            return Err(Conflict {
                key,
                incoming: contact,
            });
        }

        tracing::debug!("Adding contact: {}", key);
        self.entries.insert(key, contact);
        Ok(UpsertStatus::Added)
    }

    /// Finish an insert that hit a [`Conflict`].
    ///
    /// `Granted` replaces the whole stored record. `Denied` drops the
    /// incoming contact. If the key was removed in the meantime the contact
    /// is simply added.
    pub fn resolve_conflict(
        &mut self,
        conflict: Conflict,
        confirmation: Confirmation,
    ) -> UpsertStatus {
        let Conflict { key, incoming } = conflict;

        if !self.entries.contains_key(&key) {
            tracing::debug!("Conflict for {} vanished, adding", key);
            self.entries.insert(key, incoming);
            return UpsertStatus::Added;
        }

        match confirmation {
            Confirmation::Granted => {
                tracing::debug!("Overwriting contact: {}", key);
                self.entries.insert(key, incoming);
                UpsertStatus::UpdatedWithConfirmation
            }
            Confirmation::Denied => {
                tracing::debug!("Overwrite declined for contact: {}", key);
                UpsertStatus::RejectedNoConfirmation
            }
        }
    }

    /// Exact, case-sensitive lookup by full-name key.
    pub fn find_by_name(&self, full_name: &str) -> Option<&Contact> {
        self.entries.get(full_name)
    }

    /// First contact, in ascending key order, whose stored phone number
    /// equals `phone` after normalization.
    pub fn find_by_phone(&self, phone: &str) -> Option<(&ContactKey, &Contact)> {
        let digits = normalize_phone(phone);
        self.entries
            .iter()
            .find(|(_, contact)| contact.phone_number.as_str() == digits)
    }

    /// Every contact sharing the phone number, in ascending key order.
    pub fn find_all_by_phone(&self, phone: &str) -> Vec<(&ContactKey, &Contact)> {
        let digits = normalize_phone(phone);
        self.entries
            .iter()
            .filter(|(_, contact)| contact.phone_number.as_str() == digits)
            .collect()
    }

    /// Remove the contact stored under `full_name`.
    ///
    /// Returns the removed contact, or `None` if the key was absent, in
    /// which case nothing changes.
    pub fn delete(&mut self, full_name: &str) -> Option<Contact> {
        let removed = self.entries.remove(full_name);
        match removed {
            Some(_) => tracing::debug!("Deleted contact: {}", full_name),
            None => tracing::debug!("Delete of unknown contact: {}", full_name),
        }
        removed
    }

    /// All entries in ascending key order.
    pub fn list_all(&self) -> impl Iterator<Item = (&ContactKey, &Contact)> + '_ {
        self.entries.iter()
    }
}

impl FromIterator<Contact> for Directory {
    /// Collect contacts under their own keys. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|c| (c.key(), c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactForm;

    fn contact(first: &str, last: &str, phone: &str) -> Contact {
        Contact::build(ContactForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone_number: phone.to_string(),
            country_code: "+1".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            birthdate: "1990-01-01".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_upsert_adds_new_key() {
        let mut dir = Directory::new();
        let status = dir.upsert(contact("Amy", "B", "1111111111"), Confirmation::Denied);
        assert_eq!(status, UpsertStatus::Added);
        assert_eq!(dir.len(), 1);
        assert!(dir.contains("Amy B"));
    }

    #[test]
    fn test_upsert_conflict_respects_confirmation() {
        let mut dir = Directory::new();
        dir.upsert(contact("Amy", "B", "1111111111"), Confirmation::Granted);

        let status = dir.upsert(contact("Amy", "B", "2222222222"), Confirmation::Denied);
        assert_eq!(status, UpsertStatus::RejectedNoConfirmation);
        assert_eq!(
            dir.find_by_name("Amy B").unwrap().phone_number.as_str(),
            "1111111111"
        );

        let status = dir.upsert(contact("Amy", "B", "2222222222"), Confirmation::Granted);
        assert_eq!(status, UpsertStatus::UpdatedWithConfirmation);
        assert_eq!(
            dir.find_by_name("Amy B").unwrap().phone_number.as_str(),
            "2222222222"
        );
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_try_insert_conflict_leaves_directory_unchanged() {
        let mut dir = Directory::new();
        dir.try_insert(contact("Amy", "B", "1111111111")).unwrap();
        let before = dir.clone();

        let conflict = dir.try_insert(contact("Amy", "B", "2222222222")).unwrap_err();
        assert_eq!(conflict.key().as_str(), "Amy B");
        assert_eq!(conflict.incoming().phone_number.as_str(), "2222222222");
        assert_eq!(conflict.to_string(), "Contact 'Amy B' already exists");
        assert_eq!(dir, before);

        let status = dir.resolve_conflict(conflict, Confirmation::Denied);
        assert_eq!(status, UpsertStatus::RejectedNoConfirmation);
        assert_eq!(dir, before);
    }

    #[test]
    fn test_resolve_conflict_after_key_removed_adds() {
        let mut dir = Directory::new();
        dir.try_insert(contact("Amy", "B", "1111111111")).unwrap();
        let conflict = dir.try_insert(contact("Amy", "B", "2222222222")).unwrap_err();
        dir.delete("Amy B");

        let status = dir.resolve_conflict(conflict, Confirmation::Denied);
        assert_eq!(status, UpsertStatus::Added);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let mut dir = Directory::new();
        dir.upsert(contact("Amy", "B", "1111111111"), Confirmation::Denied);
        assert!(dir.find_by_name("Amy B").is_some());
        assert!(dir.find_by_name("amy b").is_none());
        assert!(dir.find_by_name("Amy").is_none());
        assert!(dir.find_by_name("Amy B ").is_none());
    }

    #[test]
    fn test_find_by_phone_first_in_key_order() {
        let mut dir = Directory::new();
        dir.upsert(contact("Zoe", "A", "5555555555"), Confirmation::Denied);
        dir.upsert(contact("Amy", "B", "5555555555"), Confirmation::Denied);

        let (key, _) = dir.find_by_phone("555-555-5555").unwrap();
        assert_eq!(key.as_str(), "Amy B");

        let all = dir.find_all_by_phone("5555555555");
        let keys: Vec<&str> = all.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Amy B", "Zoe A"]);

        assert!(dir.find_by_phone("0000000000").is_none());
    }

    #[test]
    fn test_delete_reports_not_found() {
        let mut dir = Directory::new();
        dir.upsert(contact("Amy", "B", "1111111111"), Confirmation::Denied);
        let before = dir.clone();

        assert!(dir.delete("Nobody Here").is_none());
        assert_eq!(dir, before);

        let removed = dir.delete("Amy B").unwrap();
        assert_eq!(removed.first_name, "Amy");
        assert!(dir.is_empty());
    }

    #[test]
    fn test_list_all_sorted() {
        let mut dir = Directory::new();
        dir.upsert(contact("Zoe", "A", "1111111111"), Confirmation::Denied);
        dir.upsert(contact("Amy", "B", "2222222222"), Confirmation::Denied);

        let keys: Vec<&str> = dir.list_all().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Amy B", "Zoe A"]);

        assert_eq!(Directory::new().list_all().count(), 0);
    }

    #[test]
    fn test_from_iterator_keys_by_name() {
        let dir: Directory = vec![
            contact("Zoe", "A", "1111111111"),
            contact("Amy", "B", "2222222222"),
        ]
        .into_iter()
        .collect();
        assert_eq!(dir.len(), 2);
        assert!(dir.contains("Zoe A"));
    }

    #[test]
    fn test_confirmation_from_bool() {
        assert_eq!(Confirmation::from(true), Confirmation::Granted);
        assert_eq!(Confirmation::from(false), Confirmation::Denied);
    }
}
