//! # kerneldb
//!
//! Command line front end of the kernel database compiler.
//!
//! The binary in `main.rs` only sets up logging and dispatches to [`cli`];
//! everything else lives here so integration tests can drive it.

pub mod cli;
pub mod config;
