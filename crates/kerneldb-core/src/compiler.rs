//! # Kernel-Type Compiler
//!
//! Compiles one kernel-type directory: select the description file, then
//! dispatch to the grammar it is written in. Every failure scoped to the
//! directory becomes an [`Outcome::Skipped`] warning.

use crate::grammar::{Outcome, kernel_db, makedb};
use crate::selector::{self, Grammar};
use crate::{KernelDbError, Warning};
use std::path::Path;

/// Kernel type named by a directory (its final path component).
pub fn kernel_type_of(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compile the kernel-type directory into an [`Outcome`].
pub fn compile_kernel_type(directory: &Path) -> Outcome {
    let kernel_type = kernel_type_of(directory);
    match try_compile(directory, &kernel_type) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::Skipped(Warning::Unreadable {
            kernel_type,
            reason: e.to_string(),
        }),
    }
}

fn try_compile(directory: &Path, kernel_type: &str) -> Result<Outcome, KernelDbError> {
    let Some(file) = selector::select(directory)? else {
        return Ok(Outcome::Skipped(Warning::MissingDescriptionFile {
            kernel_type: kernel_type.to_string(),
        }));
    };

    match file.grammar {
        Grammar::FilterList => makedb::parse_file(&file.path, kernel_type).map(Outcome::Parsed),
        Grammar::ObjectGroup => kernel_db::parse_file(&file.path, kernel_type),
    }
}
