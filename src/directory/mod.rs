//! In-memory contact directory.
//!
//! A keyed, always-sorted collection of contacts with an explicit
//! overwrite-confirmation policy.

mod store;

pub use store::{Confirmation, Conflict, Directory, UpsertStatus};
