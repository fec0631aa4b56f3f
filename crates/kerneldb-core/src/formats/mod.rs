//! # Output Formats
//!
//! Serialization of the mission document for downstream consumers.
//! File I/O operations are in the app layer.

pub mod json;

pub use json::{DEFAULT_EXTENSION, document_from_json, document_to_json, document_to_string};
