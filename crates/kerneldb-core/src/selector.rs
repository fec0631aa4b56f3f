//! # Version Selector
//!
//! Picks the single authoritative description file of a kernel-type
//! directory.
//!
//! Makedb files take priority over `kernels.<version>.db` files. Within a
//! family the lexicographically greatest name wins. That is a proxy for "most
//! recent" which only holds for fixed-width version numbers: `kernels.9.db`
//! sorts after `kernels.10.db`.

use crate::KernelDbError;
use crate::primitives::{KERNEL_DB_PREFIX, KERNEL_DB_SUFFIX, MAKEDB_MARKER};
use std::path::{Path, PathBuf};

/// Which legacy grammar a description file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grammar {
    /// "makedb" attribute assignments.
    FilterList,
    /// "kernels.<version>.db" object/group blocks.
    ObjectGroup,
}

impl Grammar {
    /// Human-readable grammar name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FilterList => "makedb",
            Self::ObjectGroup => "kernel-db",
        }
    }
}

/// The description file chosen for a kernel-type directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionFile {
    pub path: PathBuf,
    pub grammar: Grammar,
}

/// Whether a file name follows the makedb convention (`*makedb*`).
#[must_use]
pub fn is_makedb_name(name: &str) -> bool {
    name.contains(MAKEDB_MARKER)
}

/// Whether a file name follows the `kernels.*.db` convention.
#[must_use]
pub fn is_kernel_db_name(name: &str) -> bool {
    name.len() >= KERNEL_DB_PREFIX.len() + KERNEL_DB_SUFFIX.len()
        && name.starts_with(KERNEL_DB_PREFIX)
        && name.ends_with(KERNEL_DB_SUFFIX)
}

/// Choose a description file among candidate names.
///
/// Pure and independent of the order of `names`.
pub fn select_from_names<'a, I>(names: I) -> Option<(&'a str, Grammar)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut makedb: Option<&str> = None;
    let mut kernel_db: Option<&str> = None;

    for name in names {
        if is_makedb_name(name) {
            makedb = makedb.max(Some(name));
        } else if is_kernel_db_name(name) {
            kernel_db = kernel_db.max(Some(name));
        }
    }

    makedb
        .map(|name| (name, Grammar::FilterList))
        .or_else(|| kernel_db.map(|name| (name, Grammar::ObjectGroup)))
}

/// Select the description file of a kernel-type directory.
///
/// Only files with UTF-8 names are considered; symlinks are followed. Returns `Ok(None)` when
/// no candidate exists.
pub fn select(directory: &Path) -> Result<Option<DescriptionFile>, KernelDbError> {
    let entries = std::fs::read_dir(directory).map_err(|e| {
        KernelDbError::IoError(format!("Cannot list '{}': {}", directory.display(), e))
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| KernelDbError::IoError(e.to_string()))?;
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    Ok(
        select_from_names(names.iter().map(String::as_str)).map(|(name, grammar)| {
            DescriptionFile {
                path: directory.join(name),
                grammar,
            }
        }),
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_conventions() {
        assert!(is_makedb_name("kernels.0003.makedb"));
        assert!(is_makedb_name("makedb"));
        assert!(is_kernel_db_name("kernels.0001.db"));
        assert!(is_kernel_db_name("kernels..db"));
        assert!(!is_kernel_db_name("kernels.db"));
        assert!(!is_kernel_db_name("kernels.0001.db.bak"));
        assert!(!is_kernel_db_name("mykernels.0001.db"));
    }

    #[test]
    fn makedb_takes_priority() {
        let names = ["kernels.0005.db", "kernels.0001.makedb", "kernels.0009.db"];
        assert_eq!(
            select_from_names(names),
            Some(("kernels.0001.makedb", Grammar::FilterList))
        );
    }

    #[test]
    fn greatest_kernel_db_wins() {
        let names = ["kernels.002.db", "kernels.010.db", "kernels.001.db"];
        assert_eq!(
            select_from_names(names),
            Some(("kernels.010.db", Grammar::ObjectGroup))
        );
    }

    #[test]
    fn nothing_to_select() {
        let names = ["README", "ck.0001.bc", "kernels.txt"];
        assert_eq!(select_from_names(names), None);
    }

    #[test]
    fn select_ignores_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("kernels.9999.db")).expect("mkdir");
        std::fs::write(dir.path().join("kernels.0001.db"), "").expect("write");

        let selected = select(dir.path()).expect("select").expect("some");
        assert_eq!(selected.path, dir.path().join("kernels.0001.db"));
        assert_eq!(selected.grammar, Grammar::ObjectGroup);
    }

    #[cfg(unix)]
    #[test]
    fn select_follows_symlinked_description_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let shared = dir.path().join("shared");
        let ck = dir.path().join("ck");
        std::fs::create_dir(&shared).expect("mkdir");
        std::fs::create_dir(&ck).expect("mkdir");
        std::fs::write(shared.join("kernels.0003.makedb"), "").expect("write");
        std::os::unix::fs::symlink(
            shared.join("kernels.0003.makedb"),
            ck.join("kernels.0003.makedb"),
        )
        .expect("symlink");
        std::os::unix::fs::symlink(shared.join("absent.db"), ck.join("kernels.0009.db"))
            .expect("symlink");

        let selected = select(&ck).expect("select").expect("some");
        assert_eq!(selected.path, ck.join("kernels.0003.makedb"));
        assert_eq!(selected.grammar, Grammar::FilterList);
    }

    #[test]
    fn select_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = select(&dir.path().join("absent"));
        assert!(matches!(result, Err(KernelDbError::IoError(_))));
    }
}
