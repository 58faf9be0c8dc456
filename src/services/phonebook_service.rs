//! Phonebook session service.
//!
//! Loads the directory once at open, applies store operations, and saves
//! at shutdown (and after every change when configured to).

use crate::directory::{Confirmation, Conflict, Directory, UpsertStatus};
use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::DirectoryRepository;
use std::path::{Path, PathBuf};

/// When the directory is written back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePolicy {
    /// Only in [`PhonebookService::shutdown`].
    #[default]
    OnExit,
    /// After every applied change, and again at shutdown.
    OnChange,
}

/// The final save failed.
///
/// Carries the directory as it was at shutdown so the caller can retry or
/// write it somewhere else.
#[derive(Debug, thiserror::Error)]
#[error("Final save failed: {source}")]
pub struct ShutdownError {
    #[source]
    pub source: StorageError,
    pub directory: Directory,
}

/// Owns the directory between startup and shutdown.
pub struct PhonebookService {
    directory: Directory,
    repository: Box<dyn DirectoryRepository>,
    save_policy: SavePolicy,
    load_error: Option<StorageError>,
    backup_path: Option<PathBuf>,
    save_error: Option<StorageError>,
}

impl PhonebookService {
    /// Load the directory from `repository`.
    ///
    /// Never fails: if loading errors, the service starts with an empty
    /// directory and the error is kept for [`PhonebookService::load_error`].
    /// The unreadable data is backed up through [`DirectoryRepository::backup`].
    pub fn open(repository: Box<dyn DirectoryRepository>, save_policy: SavePolicy) -> Self {
        let (directory, load_error, backup_path) = match repository.load() {
            Ok(directory) => (directory, None, None),
            Err(e) => {
                tracing::warn!("Error loading phonebook: {}. Starting empty", e);
                let backup_path = match repository.backup() {
                    Ok(path) => path,
                    Err(backup_err) => {
                        tracing::warn!("Could not back up unreadable phonebook: {}", backup_err);
                        None
                    }
                };
                (Directory::new(), Some(e), backup_path)
            }
        };

        Self {
            directory,
            repository,
            save_policy,
            load_error,
            backup_path,
            save_error: None,
        }
    }

    /// Read access to the current directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The error that forced an empty start, if any.
    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    /// Where the unreadable data was copied after a failed load.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Take the error from the most recent failed save-on-change.
    pub fn take_save_error(&mut self) -> Option<StorageError> {
        self.save_error.take()
    }

    /// See [`Directory::upsert`].
    pub fn upsert(&mut self, contact: Contact, confirmation: Confirmation) -> UpsertStatus {
        let status = self.directory.upsert(contact, confirmation);
        self.after_upsert(status);
        status
    }

    /// See [`Directory::try_insert`].
    pub fn try_insert(&mut self, contact: Contact) -> Result<UpsertStatus, Conflict> {
        let status = self.directory.try_insert(contact)?;
        self.after_upsert(status);
        Ok(status)
    }

    /// See [`Directory::resolve_conflict`].
    pub fn resolve_conflict(
        &mut self,
        conflict: Conflict,
        confirmation: Confirmation,
    ) -> UpsertStatus {
        let status = self.directory.resolve_conflict(conflict, confirmation);
        self.after_upsert(status);
        status
    }

    /// See [`Directory::delete`].
    pub fn delete(&mut self, full_name: &str) -> Option<Contact> {
        let removed = self.directory.delete(full_name);
        if removed.is_some() {
            self.after_change();
        }
        removed
    }

    /// Write the current directory now.
    ///
    /// The in-memory directory is untouched whether or not this succeeds.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.directory)
    }

    /// Final save. Consumes the service so it runs exactly once.
    ///
    /// # Errors
    ///
    /// On failure the directory comes back inside the [`ShutdownError`].
    pub fn shutdown(self) -> Result<Directory, ShutdownError> {
        match self.repository.save(&self.directory) {
            Ok(()) => Ok(self.directory),
            Err(source) => {
                tracing::error!("Error saving phonebook: {}", source);
                Err(ShutdownError {
                    source,
                    directory: self.directory,
                })
            }
        }
    }

    fn after_upsert(&mut self, status: UpsertStatus) {
        if status != UpsertStatus::RejectedNoConfirmation {
            self.after_change();
        }
    }

    fn after_change(&mut self) {
        if self.save_policy != SavePolicy::OnChange {
            return;
        }
        match self.repository.save(&self.directory) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                tracing::error!("Error saving phonebook after change: {}", e);
                self.save_error = Some(e);
            }
        }
    }
}

impl std::fmt::Debug for PhonebookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhonebookService")
            .field("contacts", &self.directory.len())
            .field("save_policy", &self.save_policy)
            .field("load_error", &self.load_error)
            .field("backup_path", &self.backup_path)
            .finish()
    }
}
