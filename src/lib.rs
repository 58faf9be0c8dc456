//! Phonebook - a local, single-user contact directory.
//!
//! Contacts are validated on entry, kept in an in-memory directory keyed by
//! full name, and persisted to a JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Field validators and validated value types
//! - **models**: The contact record and its raw form input
//! - **directory**: Keyed in-memory store with overwrite confirmation
//! - **repositories**: Load/save of the directory (JSON file)
//! - **services**: Session owner: load at open, save at shutdown
//! - **config**: Configuration from environment variables
//! - **error**: Storage and configuration error types
//! - **console**: Line-oriented menu front end

pub mod config;
pub mod console;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use directory::{Confirmation, Conflict, Directory, UpsertStatus};
pub use domain::{
    validate_country_code, validate_date, validate_email, validate_phone, ValidationError,
};
pub use error::{ConfigError, StorageError};
pub use models::{Contact, ContactForm};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use services::{PhonebookService, SavePolicy, ShutdownError};
