use phonebook::error::{StorageError, StorageResult};
use phonebook::{Directory, DirectoryRepository};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Which operation the mock should fail.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailMode {
    None,
    LoadIo,
    LoadParse,
    Save,
}

/// Mock directory repository for testing.
///
/// Keeps the "stored" directory in memory, can be told to fail loads or
/// saves, and tracks method calls for verification. Clones share state, so
/// a test can keep one handle after boxing another into a service.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDirectoryRepository {
    stored: Arc<Mutex<Option<Directory>>>,
    fail_mode: Arc<Mutex<FailMode>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_mode: Arc::new(Mutex::new(FailMode::None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(directory);
        repo
    }

    pub fn set_fail_mode(&self, mode: FailMode) {
        *self.fail_mode.lock().unwrap() = mode;
    }

    /// The last saved directory, if any save happened.
    pub fn stored(&self) -> Option<Directory> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn io_error() -> StorageError {
        StorageError::Io {
            path: PathBuf::from("mock.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
        }
    }
}

impl Default for MockDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");

        match *self.fail_mode.lock().unwrap() {
            FailMode::LoadIo => return Err(Self::io_error()),
            FailMode::LoadParse => {
                let source = serde_json::from_str::<Directory>("{not json").unwrap_err();
                return Err(StorageError::Parse {
                    path: PathBuf::from("mock.json"),
                    source,
                });
            }
            _ => {}
        }

        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_mode.lock().unwrap() == FailMode::Save {
            return Err(Self::io_error());
        }

        *self.stored.lock().unwrap() = Some(directory.clone());
        Ok(())
    }

    fn backup(&self) -> StorageResult<Option<PathBuf>> {
        self.track_call("backup");
        Ok(Some(PathBuf::from("mock.json.bak")))
    }
}
