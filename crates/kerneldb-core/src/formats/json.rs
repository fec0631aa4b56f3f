//! # JSON Format
//!
//! The mission configuration is written as JSON with 4-space indentation,
//! the layout of the hand-maintained configuration files it sits beside.
//!
//! Reading a document back is supported so consumers and tests can check
//! a written file against a fresh compilation.

use crate::document::KernelTypeMap;
use crate::{KernelDbError, MissionDocument};
use serde::Serialize;
use std::collections::BTreeMap;

/// File extension of written mission configurations.
pub const DEFAULT_EXTENSION: &str = "json";

const INDENT: &[u8] = b"    ";

/// Serialize a document to pretty-printed JSON bytes.
///
/// This is a pure transformation - no file I/O.
pub fn document_to_json(document: &MissionDocument) -> Result<Vec<u8>, KernelDbError> {
    let mut out = Vec::with_capacity(1024);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| KernelDbError::SerializationError(e.to_string()))?;
    Ok(out)
}

/// Serialize a document to a pretty-printed JSON string.
pub fn document_to_string(document: &MissionDocument) -> Result<String, KernelDbError> {
    let bytes = document_to_json(document)?;
    String::from_utf8(bytes).map_err(|e| KernelDbError::SerializationError(e.to_string()))
}

/// Deserialize a document of the given mission from JSON bytes.
pub fn document_from_json(mission: &str, bytes: &[u8]) -> Result<MissionDocument, KernelDbError> {
    let entries: BTreeMap<String, KernelTypeMap> = serde_json::from_slice(bytes).map_err(|e| {
        KernelDbError::SerializationError(format!("Failed to parse mission document: {}", e))
    })?;
    MissionDocument::from_entries(mission, entries)
}
