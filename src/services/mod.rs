//! Application service layer.
//!
//! The service owns the in-memory directory for the lifetime of the
//! process and decides when it is written back through the repository.

mod phonebook_service;

pub use phonebook_service::{PhonebookService, SavePolicy, ShutdownError};
