//! Registrar core library — record model, roster store, JSON persistence.
//!
//! Public API surface:
//! - [`types`] — validated registration records
//! - [`roster`] — the in-memory ordered store
//! - [`persistence`] — load / save of the roster file
//! - [`error`] — [`ValidationError`] and [`PersistError`]

pub mod error;
pub mod persistence;
pub mod roster;
pub mod types;

pub use error::{PersistError, ValidationError};
pub use persistence::{LoadResult, DEFAULT_FILE_NAME};
pub use roster::Roster;
pub use types::{CourseName, Name, NameField, Student};
