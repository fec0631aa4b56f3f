//! # kerneldb-core
//!
//! The kernel database compiler - THE LOGIC.
//!
//! Planetary mission archives describe the kernels of every kernel type
//! (`ck`, `spk`, `fk`, ...) in a per-directory description file written in one
//! of two legacy grammars. This crate compiles those files into a single
//! mission configuration document consumed by kernel lookup services.
//!
//! ## Pipeline
//!
//! ```text
//! <mission>/kernels/<type>/   ──► selector ──► grammar::{makedb, kernel_db}
//!                                                  │ (pattern compiler)
//!                                                  ▼
//!                         MissionDocument ◄── mission::assemble
//! ```
//!
//! ## Architectural Constraints
//!
//! - Synchronous and single-threaded; one description file read at a time
//! - No logging: diagnostics are returned as [`Warning`] values
//! - Parsers return values; [`MissionDocument`] owns the merge policy

// =============================================================================
// MODULES
// =============================================================================

pub mod compiler;
pub mod document;
pub mod formats;
pub mod grammar;
pub mod mission;
pub mod pattern;
pub mod primitives;
pub mod selector;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Dependency, FilterRecord, KernelDbError, KernelTypeRecord, ParsedDescription,
    SpecialCaseGroup, Warning,
};

// =============================================================================
// RE-EXPORTS: Compiler
// =============================================================================

pub use compiler::compile_kernel_type;
pub use document::{KernelTypeMap, MissionDocument};
pub use grammar::Outcome;
pub use mission::{Compilation, assemble, mission_name};
pub use pattern::compile;
pub use selector::{DescriptionFile, Grammar, select};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{document_from_json, document_to_json, document_to_string};
