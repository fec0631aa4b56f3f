//! # kerneldb CLI Module
//!
//! This module implements the CLI interface for kerneldb.
//!
//! ## Available Commands
//!
//! - `generate` - Compile a mission root into its configuration document
//! - `select` - Show which description file a kernel-type directory uses

mod commands;

use crate::config::Config;
use clap::{Parser, Subcommand};
use kerneldb_core::KernelDbError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// kerneldb - kernel database compiler
///
/// Compiles the makedb and kernels.*.db description files of a mission
/// archive into one mission configuration document.
#[derive(Parser, Debug)]
#[command(name = "kerneldb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a kerneldb.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory receiving <mission>.json files (overrides config and env)
    #[arg(short = 'D', long, global = true)]
    pub db_dir: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a mission root into its configuration document
    Generate {
        /// Mission root, e.g. /data/isis_data/cassini
        mission_path: PathBuf,

        /// Where to log the document: file, terminal or both
        destination: String,
    },

    /// Show the description file selected for a kernel-type directory
    Select {
        /// Kernel-type directory, e.g. /data/isis_data/cassini/kernels/ck
        directory: PathBuf,
    },
}

// =============================================================================
// DESTINATION
// =============================================================================

/// Where a generated document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// `<db_dir>/<mission>.<extension>`
    File,
    /// Standard output.
    Terminal,
    /// File and standard output.
    Both,
    /// Any other mode: neither file nor terminal.
    Ignored,
}

impl Destination {
    /// Interpret a destination mode, case-insensitively.
    #[must_use]
    pub fn from_mode(mode: &str) -> Self {
        match mode.to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "terminal" => Self::Terminal,
            "both" => Self::Both,
            _ => Self::Ignored,
        }
    }

    /// Whether the document is written to the configuration directory.
    #[must_use]
    pub const fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    /// Whether the document is printed to standard output.
    #[must_use]
    pub const fn prints(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), KernelDbError> {
    match cli.command {
        Commands::Generate {
            mission_path,
            destination,
        } => {
            let destination = Destination::from_mode(&destination);
            // Only file output reads the configuration.
            let config = if destination.writes_file() {
                Config::resolve(cli.config.as_deref(), cli.db_dir)?
            } else {
                Config::default()
            };
            cmd_generate(&mission_path, destination, &config).map(|_| ())
        }
        Commands::Select { directory } => cmd_select(&directory, cli.json_mode),
    }
}
