//! # Mission Assembler
//!
//! Compiles every kernel-type directory under `<mission>/kernels/` into one
//! [`MissionDocument`].
//!
//! - Directories are processed in sorted order, so output only depends on
//!   the filesystem state.
//! - A failing kernel type never aborts the run; it contributes a warning.
//! - Only an invalid mission root is fatal.

use crate::compiler::compile_kernel_type;
use crate::grammar::Outcome;
use crate::primitives::KERNELS_DIR;
use crate::{KernelDbError, MissionDocument, Warning};
use std::path::{Path, PathBuf};

/// The result of compiling one mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub document: MissionDocument,
    /// Non-fatal diagnostics in processing order.
    pub warnings: Vec<Warning>,
}

/// Mission name of a root directory: its final path component.
pub fn mission_name(root: &Path) -> Result<String, KernelDbError> {
    let named = match root.file_name() {
        Some(name) => PathBuf::from(name),
        // "." or "..": resolve to the directory they point at
        None => root.canonicalize().map_err(|e| {
            KernelDbError::InvalidMissionRoot(format!("'{}': {}", root.display(), e))
        })?,
    };

    named
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            KernelDbError::InvalidMissionRoot(format!(
                "'{}' does not name a mission",
                root.display()
            ))
        })
}

/// Kernel-type directories of a mission root, sorted by name.
pub fn kernel_type_directories(root: &Path) -> Result<Vec<PathBuf>, KernelDbError> {
    if !root.is_dir() {
        return Err(KernelDbError::InvalidMissionRoot(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let kernels = root.join(KERNELS_DIR);
    if !kernels.is_dir() {
        return Err(KernelDbError::InvalidMissionRoot(format!(
            "'{}' has no {}/ directory",
            root.display(),
            KERNELS_DIR
        )));
    }

    let entries = std::fs::read_dir(&kernels).map_err(|e| {
        KernelDbError::IoError(format!("Cannot list '{}': {}", kernels.display(), e))
    })?;

    let mut directories = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| KernelDbError::IoError(e.to_string()))?.path();
        if path.is_dir() {
            directories.push(path);
        }
    }
    directories.sort();

    Ok(directories)
}

/// Compile a mission root into its configuration document.
pub fn assemble(root: &Path) -> Result<Compilation, KernelDbError> {
    let directories = kernel_type_directories(root)?;
    let mut document = MissionDocument::new(mission_name(root)?);
    let mut warnings = Vec::new();

    for directory in &directories {
        match compile_kernel_type(directory) {
            Outcome::Parsed(parsed) => warnings.extend(document.merge(parsed)),
            Outcome::Skipped(warning) => warnings.push(warning),
        }
    }

    Ok(Compilation { document, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn mission_name_is_last_component() {
        assert_eq!(
            mission_name(Path::new("/data/isis/cassini")).expect("name"),
            "cassini"
        );
        assert_eq!(
            mission_name(Path::new("/data/isis/cassini/")).expect("name"),
            "cassini"
        );
    }

    #[test]
    fn root_without_kernels_dir_is_invalid() {
        let root = tempfile::tempdir().expect("tempdir");
        let result = assemble(root.path());
        assert!(matches!(result, Err(KernelDbError::InvalidMissionRoot(_))));
    }

    #[test]
    fn missing_root_is_invalid() {
        let root = tempfile::tempdir().expect("tempdir");
        let result = assemble(&root.path().join("nope"));
        assert!(matches!(result, Err(KernelDbError::InvalidMissionRoot(_))));
    }

    #[test]
    fn directories_are_sorted_and_files_ignored() {
        let root = tempfile::tempdir().expect("tempdir");
        let kernels = root.path().join(KERNELS_DIR);
        for name in ["spk", "ck", "fk"] {
            fs::create_dir_all(kernels.join(name)).expect("mkdir");
        }
        fs::write(kernels.join("README"), "").expect("write");

        let names: Vec<_> = kernel_type_directories(root.path())
            .expect("list")
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["ck", "fk", "spk"]);
    }
}
