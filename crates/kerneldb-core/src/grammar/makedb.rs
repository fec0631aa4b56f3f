//! # Filter-List Grammar ("makedb")
//!
//! ```text
//! # comment
//! predictfilter = ("mk_p_????.bc")
//! reconfilter   = ("mk_????.bc", \
//!                  "mk_extra_??.bc")
//! recondir      = ( "$mission/kernels/ck" )
//! ```
//!
//! Only `predictfilter`, `reconfilter` and `smithedfilter` are meaningful.
//! Lines mentioning `recondir` declare a dependency this grammar does not
//! resolve and are skipped. Anything else is free-form commentary.

use super::read_description;
use crate::pattern::{compile, split_values};
use crate::primitives::{
    COMMENT_LEADER, CONTINUATION, PREDICT_FILTER, RECON_DIR_MARKER, RECON_FILTER, SMITHED_FILTER,
};
use crate::types::push_unique;
use crate::{FilterRecord, KernelDbError, KernelTypeRecord, ParsedDescription};
use std::path::Path;

/// Parse makedb text for one kernel type.
///
/// The first occurrence of each attribute wins; later ones are ignored.
pub fn parse(text: &str, kernel_type: &str) -> ParsedDescription {
    let mut recon: Option<Vec<String>> = None;
    let mut predicted: Option<Vec<String>> = None;
    let mut smithed: Option<Vec<String>> = None;

    for line in logical_lines(text) {
        if line.trim_start().starts_with(COMMENT_LEADER) || line.contains(RECON_DIR_MARKER) {
            continue;
        }
        let Some((key, rhs)) = line.split_once('=') else {
            continue;
        };
        let key = key
            .split_whitespace()
            .next_back()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let slot = match key.as_str() {
            RECON_FILTER => &mut recon,
            PREDICT_FILTER => &mut predicted,
            SMITHED_FILTER => &mut smithed,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(compile_values(rhs));
        }
    }

    let record = KernelTypeRecord {
        kernels: recon.unwrap_or_default(),
        deps: None,
        predicted: filter_record(predicted),
        smithed: filter_record(smithed),
    };

    ParsedDescription {
        kernel_type: kernel_type.to_string(),
        record: (!record.is_empty()).then_some(record),
        special_cases: Vec::new(),
    }
}

/// Read and parse a makedb file.
pub fn parse_file(path: &Path, kernel_type: &str) -> Result<ParsedDescription, KernelDbError> {
    let text = read_description(path)?;
    Ok(parse(&text, kernel_type))
}

fn compile_values(rhs: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    for token in split_values(rhs) {
        push_unique(&mut patterns, compile(&token));
    }
    patterns
}

fn filter_record(patterns: Option<Vec<String>>) -> Option<FilterRecord> {
    patterns
        .filter(|kernels| !kernels.is_empty())
        .map(|kernels| FilterRecord { kernels })
}

/// Join backslash-continued physical lines into logical lines.
///
/// A comment line never continues, even when it ends in a backslash.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();

    for physical in text.lines() {
        let trimmed = physical.trim_end();
        if pending.is_empty() && trimmed.trim_start().starts_with(COMMENT_LEADER) {
            lines.push(trimmed.to_string());
            continue;
        }
        match trimmed.strip_suffix(CONTINUATION) {
            Some(head) => {
                pending.push_str(head);
                pending.push(' ');
            }
            None => {
                pending.push_str(trimmed);
                lines.push(std::mem::take(&mut pending));
            }
        }
    }
    if !pending.is_empty() {
        lines.push(pending);
    }

    lines
}

// =============================================================================
// TESTS
// =============================================================================
