//! Error types for registrar-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::NameField;

/// Rejections produced by name validation.
///
/// Always recovered locally: the console reports the message and returns to
/// the menu, and nothing is appended to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name field was the empty string.
    #[error("the {field} name must not be empty")]
    EmptyName { field: NameField },

    /// The name field contained a digit, whitespace, or punctuation.
    #[error("the {field} name must contain only alphabetic characters (got {value:?})")]
    NonAlphabetic { field: NameField, value: String },
}

/// All errors that can arise from roster persistence.
///
/// A missing roster file is not represented here — that is the
/// [`LoadResult::FileAbsent`](crate::persistence::LoadResult) outcome, since
/// starting without a file is normal operation rather than a fault.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying I/O failure reading or writing the roster file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file exists but does not decode to a roster — malformed JSON, a
    /// non-array document, or a record whose name fails validation.
    #[error("failed to parse roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience constructor for [`PersistError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PersistError {
    PersistError::Io {
        path: path.into(),
        source,
    }
}
