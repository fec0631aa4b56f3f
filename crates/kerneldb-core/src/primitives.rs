//! # Grammar Primitives
//!
//! Hardcoded naming conventions and marker tokens of the legacy kernel
//! database formats.
//!
//! The compiler starts with zero configuration but fixed vocabulary.
//! These primitives are compiled into the binary and are immutable at runtime.

/// Placeholder character standing for one digit of a version or orbit counter.
pub const PLACEHOLDER: char = '?';

/// Subdirectory of a mission root that holds one directory per kernel type.
pub const KERNELS_DIR: &str = "kernels";

// =============================================================================
// DESCRIPTION FILE NAMING
// =============================================================================

/// Substring identifying a "makedb" description file (`*makedb*`).
pub const MAKEDB_MARKER: &str = "makedb";

/// Prefix of an object-group description file (`kernels.<version>.db`).
pub const KERNEL_DB_PREFIX: &str = "kernels.";

/// Suffix of an object-group description file (`kernels.<version>.db`).
pub const KERNEL_DB_SUFFIX: &str = ".db";

// =============================================================================
// FILTER-LIST ("makedb") VOCABULARY
// =============================================================================

/// Attribute listing predicted kernel file templates.
pub const PREDICT_FILTER: &str = "predictfilter";

/// Attribute listing reconstructed kernel file templates.
pub const RECON_FILTER: &str = "reconfilter";

/// Attribute listing smithed kernel file templates.
pub const SMITHED_FILTER: &str = "smithedfilter";

/// Marker for a directory-style dependency line. Such lines are skipped.
pub const RECON_DIR_MARKER: &str = "recondir";

/// Comment leader.
pub const COMMENT_LEADER: char = '#';

/// Line continuation marker.
pub const CONTINUATION: char = '\\';

// =============================================================================
// OBJECT-GROUP ("kernel-db") VOCABULARY
// =============================================================================
//
// Markers are matched against lines with all blanks removed.

pub const OBJECT_START: &str = "Object=";
pub const OBJECT_END: &[&str] = &["EndObject", "End_Object"];
pub const GROUP_START: &str = "Group=";
pub const GROUP_END: &[&str] = &["End_Group", "EndGroup"];
pub const SPECIAL_MATCH: &str = "Match=(";
pub const KERNEL_FILE: &str = "File=";

/// Kernel types that never carry an object-group description.
///
/// They are always resolved through their makedb file; an object-group file
/// found for one of them is skipped with a warning.
pub const OBJECT_GROUP_SKIP_LIST: &[&str] = &["spk", "cp"];
