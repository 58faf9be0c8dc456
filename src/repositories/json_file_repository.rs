//! JSON file persistence for the directory.

use super::traits::DirectoryRepository;
use crate::directory::Directory;
use crate::error::{StorageError, StorageResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Indentation used in the saved file.
const INDENT: &[u8] = b"    ";

/// Stores the directory as one pretty-printed JSON object in a file.
///
/// Saves go to a `.tmp` sibling that is flushed and then renamed over the
/// target, so an interrupted save never truncates a good file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `path` with `suffix` appended to its file name.
    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Sibling file that receives the data before the rename.
    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    /// Where [`DirectoryRepository::backup`] copies an unreadable file.
    pub fn backup_path(&self) -> PathBuf {
        self.sibling_path(".bak")
    }

    fn encode(directory: &Directory) -> StorageResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        directory.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }

    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let tmp = self.temp_path();
        let result = File::create(&tmp).and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            e
        })
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Directory> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    "No phonebook at {}, starting empty",
                    self.path.display()
                );
                return Ok(Directory::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let directory: Directory =
            serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for (key, contact) in directory.list_all() {
            if key.as_str() != contact.full_name() {
                tracing::warn!(
                    "Stored key '{}' does not match contact name '{}'",
                    key,
                    contact.full_name()
                );
            }
        }

        tracing::info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        let bytes = Self::encode(directory)?;
        self.write_atomically(&bytes)
            .map_err(|e| StorageError::io(&self.path, e))?;

        tracing::info!(
            "Phonebook saved to {} ({} contacts)",
            self.path.display(),
            directory.len()
        );
        Ok(())
    }

    fn backup(&self) -> StorageResult<Option<PathBuf>> {
        let backup = self.backup_path();
        match fs::copy(&self.path, &backup) {
            Ok(_) => {
                tracing::warn!(
                    "Copied unreadable phonebook {} to {}",
                    self.path.display(),
                    backup.display()
                );
                Ok(Some(backup))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&backup, e)),
        }
    }
}
