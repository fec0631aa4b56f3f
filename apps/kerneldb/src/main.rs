//! # kerneldb - Kernel Database Compiler
//!
//! The main binary for compiling mission kernel databases.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/kerneldb (THE BINARY)         │
//! │                                               │
//! │  ┌─────────────┐          ┌────────────────┐  │
//! │  │    CLI      │          │     Config     │  │
//! │  │   (clap)    │          │ (toml + env)   │  │
//! │  └──────┬──────┘          └───────┬────────┘  │
//! │         └────────────┬────────────┘           │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │ kerneldb-core │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Write db/cassini.json
//! kerneldb generate /data/isis_data/cassini file
//!
//! # Print to the terminal, or both
//! kerneldb generate /data/isis_data/cassini terminal
//! kerneldb -D SpiceQL/db generate /data/isis_data/cassini both
//!
//! # Which description file does a kernel type use?
//! kerneldb select /data/isis_data/cassini/kernels/ck
//! ```

use clap::Parser;
use kerneldb::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing — KERNELDB_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr: stdout carries the document in terminal mode.
    let log_format = std::env::var("KERNELDB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "kerneldb=debug"
    } else {
        "kerneldb=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
