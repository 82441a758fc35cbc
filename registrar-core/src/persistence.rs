//! JSON persistence for the roster.
//!
//! The roster file is a JSON array of records with `FirstName` / `LastName` /
//! `CourseName` keys (see [`crate::types`]). [`load`] and [`save`] are the
//! only places the program touches the disk, and every file handle is opened
//! and released inside a single `std::fs` call — on success and on every
//! failure path alike.
//!
//! Saves replace the file whole: serialize → write a `.tmp` sibling →
//! `rename` over the target. The sibling lives in the same directory as the
//! target, so the final rename never crosses filesystems, and a failure
//! part-way leaves the previous contents intact.

use std::path::{Path, PathBuf};

use crate::error::{io_err, PersistError};
use crate::types::Student;

/// File name used when the caller does not configure one.
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

/// Outcome of a successful [`load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// The file existed and decoded; the roster comes from disk.
    Loaded(Vec<Student>),

    /// No file at the path. Not an error: the caller starts with an empty
    /// roster and the file appears on the first save.
    FileAbsent,
}

/// Read the roster file at `path`.
///
/// Returns [`LoadResult::FileAbsent`] if there is no file,
/// [`PersistError::Io`] if it cannot be read, and [`PersistError::Parse`]
/// (path attached) if its contents do not decode to a roster.
pub fn load(path: &Path) -> Result<LoadResult, PersistError> {
    if !path.exists() {
        tracing::info!("no roster file at {}", path.display());
        return Ok(LoadResult::FileAbsent);
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let students: Vec<Student> =
        serde_json::from_str(&contents).map_err(|e| PersistError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::info!(
        "loaded {} registration(s) from {}",
        students.len(),
        path.display()
    );
    Ok(LoadResult::Loaded(students))
}

/// Replace the file at `path` with the full `students` sequence.
///
/// Creates the parent directory if it does not exist. The in-memory records
/// are untouched whether the save succeeds or fails.
pub fn save(path: &Path, students: &[Student]) -> Result<(), PersistError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let json = serde_json::to_string_pretty(students)?;
    let tmp = tmp_path(path);
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    tracing::info!(
        "saved {} registration(s) to {}",
        students.len(),
        path.display()
    );
    Ok(())
}

/// `<path>.tmp` — the write-then-rename sibling.
fn tmp_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.tmp", path.display()))
}
