use crate::directory::Directory;
use crate::error::StorageResult;
use std::path::PathBuf;

/// Durable storage for the whole directory.
///
/// The directory is always read and written as a unit; there are no
/// per-contact operations at this level. Implementations must not modify
/// the in-memory directory they are given.
pub trait DirectoryRepository {
    /// Read the stored directory.
    ///
    /// A store that has never been written yields an empty directory.
    fn load(&self) -> StorageResult<Directory>;

    /// Replace the stored directory with `directory`.
    fn save(&self, directory: &Directory) -> StorageResult<()>;

    /// Copy the stored data aside before it is overwritten.
    ///
    /// Called after a failed `load`. Returns where the copy went, or `None`
    /// when there was nothing to copy.
    fn backup(&self) -> StorageResult<Option<PathBuf>> {
        Ok(None)
    }
}
