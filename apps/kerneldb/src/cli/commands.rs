//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Destination;
use crate::config::Config;
use kerneldb_core::{
    Compilation, KernelDbError, MissionDocument, assemble, document_to_json, document_to_string,
    select,
};
use std::path::{Path, PathBuf};

/// Validate the output directory.
///
/// The directory must already exist; nothing is created implicitly.
fn validate_output_dir(dir: &Path) -> Result<(), KernelDbError> {
    let canonical = dir.canonicalize().map_err(|e| {
        KernelDbError::IoError(format!("Invalid output directory '{}': {}", dir.display(), e))
    })?;

    if !canonical.is_dir() {
        return Err(KernelDbError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            dir.display()
        )));
    }

    Ok(())
}

// =============================================================================
// GENERATE COMMAND
// =============================================================================

/// Compile a mission and send the document to its destination.
///
/// Returns the compilation so callers can inspect what was produced. A fatal
/// error returns before anything is written or printed.
pub fn cmd_generate(
    mission_path: &Path,
    destination: Destination,
    config: &Config,
) -> Result<Compilation, KernelDbError> {
    tracing::info!("Compiling mission {:?}", mission_path);

    let compilation = assemble(mission_path)?;
    for warning in &compilation.warnings {
        tracing::warn!("{}", warning);
    }

    let document = &compilation.document;
    tracing::info!(
        mission = document.mission(),
        kernel_types = document.records().len(),
        special_cases = document.special_case_keys().count(),
        warnings = compilation.warnings.len(),
        "Mission compiled"
    );

    if destination == Destination::Ignored {
        tracing::debug!("Unrecognized destination, document not written");
    }

    if destination.writes_file() {
        let path = write_document(document, config)?;
        tracing::info!("Wrote {:?}", path);
    }

    if destination.prints() {
        println!("{}", document_to_string(document)?);
    }

    Ok(compilation)
}

/// Write a document to `<db_dir>/<mission>.<extension>`.
pub fn write_document(
    document: &MissionDocument,
    config: &Config,
) -> Result<PathBuf, KernelDbError> {
    validate_output_dir(&config.db_dir)?;
    let path = config.output_path(document.mission());

    let data = document_to_json(document)?;
    std::fs::write(&path, data)
        .map_err(|e| KernelDbError::IoError(format!("Write '{}': {}", path.display(), e)))?;

    Ok(path)
}

// =============================================================================
// SELECT COMMAND
// =============================================================================

/// Show which description file a kernel-type directory would use.
pub fn cmd_select(directory: &Path, json_mode: bool) -> Result<(), KernelDbError> {
    let selected = select(directory)?;

    if json_mode {
        let output = match &selected {
            Some(file) => serde_json::json!({
                "directory": directory.to_string_lossy(),
                "file": file.path.to_string_lossy(),
                "grammar": file.grammar.as_str(),
            }),
            None => serde_json::json!({
                "directory": directory.to_string_lossy(),
                "file": null,
                "grammar": null,
            }),
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| KernelDbError::SerializationError(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    match selected {
        Some(file) => {
            println!("Directory: {}", directory.display());
            println!("File:      {}", file.path.display());
            println!("Grammar:   {}", file.grammar.as_str());
        }
        None => {
            tracing::warn!(
                "No makedb or kernel db file found in {}",
                directory.display()
            );
        }
    }

    Ok(())
}
