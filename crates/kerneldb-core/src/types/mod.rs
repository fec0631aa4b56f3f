//! # Core Type Definitions
//!
//! This module contains the intermediate and output types shared by every
//! grammar parser:
//! - Kernel type records (`KernelTypeRecord`, `Dependency`, `FilterRecord`)
//! - Special-case groups lifted to the top level (`SpecialCaseGroup`)
//! - Parser output (`ParsedDescription`)
//! - Diagnostics and errors (`Warning`, `KernelDbError`)
//!
//! ## Canonical Shape
//!
//! Both legacy grammars normalize into the same record shape. Field names are
//! fixed by the downstream consumers: `kernels`, `deps.kernelType` and
//! `deps.kernels`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PATTERN LISTS
// =============================================================================

/// Append a pattern unless it is already present. Keeps first-seen order.
pub(crate) fn push_unique(patterns: &mut Vec<String>, pattern: String) {
    if !patterns.contains(&pattern) {
        patterns.push(pattern);
    }
}

// =============================================================================
// DEPENDENCY
// =============================================================================

/// Back-reference from a record to files of another kernel type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// The kernel type the dependent files belong to.
    #[serde(rename = "kernelType")]
    pub kernel_type: String,
    /// Compiled patterns of the dependent files.
    pub kernels: Vec<String>,
}

impl Dependency {
    /// Create a dependency on a single compiled pattern.
    #[must_use]
    pub fn new(kernel_type: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            kernel_type: kernel_type.into(),
            kernels: vec![pattern.into()],
        }
    }
}

// =============================================================================
// FILTER RECORD
// =============================================================================

/// Patterns of one quality (predicted, smithed) of a kernel type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterRecord {
    pub kernels: Vec<String>,
}

// =============================================================================
// KERNEL TYPE RECORD
// =============================================================================

/// Everything known about the kernel files of one kernel type.
///
/// Produced by exactly one parser invocation per kernel-type directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KernelTypeRecord {
    /// Compiled file-name patterns, in declaration order.
    #[serde(default)]
    pub kernels: Vec<String>,

    /// Files of another kernel type this record depends on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deps: Option<Dependency>,

    /// Predicted kernels (makedb `predictfilter`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<FilterRecord>,

    /// Smithed kernels (makedb `smithedfilter`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smithed: Option<FilterRecord>,
}

impl KernelTypeRecord {
    /// Create a record from an ordered list of patterns.
    #[must_use]
    pub fn with_kernels(kernels: Vec<String>) -> Self {
        Self {
            kernels,
            ..Self::default()
        }
    }

    /// A record is empty when no field carries any pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
            && self.deps.is_none()
            && self.predicted.is_none()
            && self.smithed.is_none()
    }
}

// =============================================================================
// SPECIAL CASE GROUP
// =============================================================================

/// A cross-cutting grouping declared by a `Match` clause.
///
/// Lifted to the top level of the mission document under `key`, with the
/// record nested under the kernel type that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCaseGroup {
    pub key: String,
    pub kernel_type: String,
    pub record: KernelTypeRecord,
}

// =============================================================================
// PARSED DESCRIPTION
// =============================================================================

/// The value returned by a grammar parser for one description file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescription {
    /// Kernel type the description file belongs to.
    pub kernel_type: String,
    /// Record for the kernel type itself, `None` if the file declared nothing.
    pub record: Option<KernelTypeRecord>,
    /// Special-case groups in discovery order.
    pub special_cases: Vec<SpecialCaseGroup>,
}

// =============================================================================
// WARNINGS
// =============================================================================

/// Non-fatal diagnostics. A warning never stops the compilation of a mission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// No makedb or kernels.*.db file in the kernel-type directory.
    #[error("no makedb or kernel db file found for kernel type {kernel_type}")]
    MissingDescriptionFile { kernel_type: String },

    /// The kernel type never carries an object-group description.
    #[error("kernel type {kernel_type} has no makedb file, skipping kernel db file")]
    UnsupportedKernelType { kernel_type: String },

    /// The directory or description file could not be read.
    #[error("cannot read description of kernel type {kernel_type}: {reason}")]
    Unreadable { kernel_type: String, reason: String },

    /// A record for this key was already present; the later one was dropped.
    #[error("duplicate entry {key}/{kernel_type} discarded, first definition kept")]
    DiscardedDuplicate { key: String, kernel_type: String },
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while compiling a kernel database.
///
/// Only a structurally invalid mission root is fatal for a compilation;
/// everything scoped to one kernel type is reported as a [`Warning`].
#[derive(Debug, Error)]
pub enum KernelDbError {
    /// The mission root does not exist or has no `kernels/` subdirectory.
    #[error("Invalid mission root: {0}")]
    InvalidMissionRoot(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================
