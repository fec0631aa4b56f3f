//! # Description File Grammars
//!
//! Parsers for the two legacy description formats:
//! - [`makedb`]: one `key = (value, ...)` attribute per line (Filter-List)
//! - [`kernel_db`]: `Object` / `Group` blocks with `Match` special cases (Object-Group)
//!
//! Both parsers are pure functions from text to [`ParsedDescription`]. The
//! `parse_file` variants read the whole file first, bounded by
//! [`MAX_DESCRIPTION_FILE_SIZE`].

pub mod kernel_db;
pub mod makedb;

use crate::{KernelDbError, ParsedDescription, Warning};
use std::path::Path;

/// Maximum size of a description file (16 MB).
///
/// Real description files are a few kilobytes; anything larger is not one.
pub const MAX_DESCRIPTION_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Result of compiling one kernel type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The description file was parsed.
    Parsed(ParsedDescription),
    /// The kernel type contributes nothing; the warning says why.
    Skipped(Warning),
}

/// Read a description file into memory.
pub(crate) fn read_description(path: &Path) -> Result<String, KernelDbError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        KernelDbError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(KernelDbError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > MAX_DESCRIPTION_FILE_SIZE {
        return Err(KernelDbError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_DESCRIPTION_FILE_SIZE
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        KernelDbError::IoError(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    // Legacy files occasionally carry Latin-1 bytes in comments.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
