mod mock_directory_repository;

#[allow(unused_imports)]
pub use mock_directory_repository::{FailMode, MockDirectoryRepository};
