//! # Object-Group Grammar ("kernel-db")
//!
//! ```text
//! Object = SpacecraftPointing
//!   Group = Selection
//!     File = ("cassini", "kernels/ck/cas_iss_?????.bc")
//!   End_Group
//!   Group = Selection
//!     Match = ("ck", "smithed")
//!     File = ("cassini", "kernels/ck/cas_smithed_??.bc")
//!     File = ("cassini", "kernels/sclk/cas_?????.tsc")
//!   End_Group
//! EndObject
//! ```
//!
//! A `Match` clause opens a special-case scope. Files inside the scope belong
//! to the group named by the clause's last value instead of the current kernel
//! type. A scoped file whose path names another kernel type becomes the
//! group's dependency; the last such file wins.
//!
//! Parsing never fails: unknown lines are ignored and a truncated file simply
//! stops at end of input.

use super::{Outcome, read_description};
use crate::pattern::{compile, split_values};
use crate::primitives::{
    COMMENT_LEADER, GROUP_END, GROUP_START, KERNEL_FILE, OBJECT_END, OBJECT_GROUP_SKIP_LIST,
    OBJECT_START, SPECIAL_MATCH,
};
use crate::types::push_unique;
use crate::{
    Dependency, KernelDbError, KernelTypeRecord, ParsedDescription, SpecialCaseGroup, Warning,
};
use std::path::Path;

/// Whether a kernel type is barred from the object-group grammar.
#[must_use]
pub fn is_skipped(kernel_type: &str) -> bool {
    OBJECT_GROUP_SKIP_LIST.contains(&kernel_type)
}

/// Parse kernel-db text for one kernel type.
///
/// Kernel types on the skip list produce [`Outcome::Skipped`] without looking
/// at the text.
pub fn parse(text: &str, kernel_type: &str) -> Outcome {
    if is_skipped(kernel_type) {
        return skipped(kernel_type);
    }

    let mut parser = Parser::new(kernel_type);
    for line in text.lines() {
        parser.feed(line);
    }
    Outcome::Parsed(parser.finish())
}

/// Read and parse a kernel-db file.
///
/// The skip list is checked before the file is opened.
pub fn parse_file(path: &Path, kernel_type: &str) -> Result<Outcome, KernelDbError> {
    if is_skipped(kernel_type) {
        return Ok(skipped(kernel_type));
    }
    let text = read_description(path)?;
    Ok(parse(&text, kernel_type))
}

fn skipped(kernel_type: &str) -> Outcome {
    Outcome::Skipped(Warning::UnsupportedKernelType {
        kernel_type: kernel_type.to_string(),
    })
}

// =============================================================================
// LINE CLASSIFICATION
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Marker<'l> {
    ObjectStart,
    ObjectEnd,
    GroupStart,
    GroupEnd,
    /// Right-hand side of a `Match = (...)` line.
    Match(&'l str),
    /// Right-hand side of a `File = ...` line.
    File(&'l str),
    Other,
}

fn classify(line: &str) -> Marker<'_> {
    let trimmed = line.trim_start();
    if trimmed.starts_with(COMMENT_LEADER) || trimmed.starts_with("/*") {
        return Marker::Other;
    }

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let rhs = || line.split_once('=').map(|(_, rhs)| rhs).unwrap_or_default();

    if compact.contains(SPECIAL_MATCH) {
        Marker::Match(rhs())
    } else if compact.contains(KERNEL_FILE) {
        Marker::File(rhs())
    } else if OBJECT_END.iter().any(|m| compact.contains(m)) {
        Marker::ObjectEnd
    } else if GROUP_END.iter().any(|m| compact.contains(m)) {
        Marker::GroupEnd
    } else if compact.contains(OBJECT_START) {
        Marker::ObjectStart
    } else if compact.contains(GROUP_START) {
        Marker::GroupStart
    } else {
        Marker::Other
    }
}

/// Split a `File` value into (embedded kernel type, file name).
///
/// `"kernels/ck/mk_????.bc"` yields `(Some("ck"), "mk_????.bc")`.
fn split_file_path(rhs: &str) -> Option<(Option<String>, String)> {
    let path = split_values(rhs).pop()?;
    let mut segments = path.rsplit('/');
    let name = segments.next().filter(|n| !n.is_empty())?.to_string();
    let kernel_type = segments
        .next()
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    Some((kernel_type, name))
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// An open special-case scope.
#[derive(Debug)]
struct OpenGroup {
    key: String,
    kernels: Vec<String>,
    deps: Option<Dependency>,
    /// Whether the scope was opened inside an `Object` block.
    in_object: bool,
}

impl OpenGroup {
    fn new(key: String, in_object: bool) -> Self {
        Self {
            key,
            kernels: Vec::new(),
            deps: None,
            in_object,
        }
    }

    fn is_empty(&self) -> bool {
        self.kernels.is_empty() && self.deps.is_none()
    }
}

#[derive(Debug)]
enum State {
    Outside,
    InObject,
    InSpecialGroup(OpenGroup),
}

struct Parser<'k> {
    kernel_type: &'k str,
    state: State,
    kernels: Vec<String>,
    special_cases: Vec<SpecialCaseGroup>,
}

impl<'k> Parser<'k> {
    fn new(kernel_type: &'k str) -> Self {
        Self {
            kernel_type,
            state: State::Outside,
            kernels: Vec::new(),
            special_cases: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        let state = std::mem::replace(&mut self.state, State::Outside);

        self.state = match (classify(line), state) {
            (Marker::Match(rhs), state) => {
                let Some(key) = split_values(rhs).pop() else {
                    self.state = state;
                    return;
                };
                match state {
                    State::Outside => State::InSpecialGroup(OpenGroup::new(key, false)),
                    State::InObject => State::InSpecialGroup(OpenGroup::new(key, true)),
                    State::InSpecialGroup(mut group) if group.is_empty() => {
                        group.key = key;
                        State::InSpecialGroup(group)
                    }
                    State::InSpecialGroup(group) => {
                        let in_object = group.in_object;
                        self.close(group);
                        State::InSpecialGroup(OpenGroup::new(key, in_object))
                    }
                }
            }

            (Marker::File(rhs), state) => {
                let Some((file_type, name)) = split_file_path(rhs) else {
                    self.state = state;
                    return;
                };
                let pattern = compile(&name);
                match state {
                    State::InSpecialGroup(mut group) => {
                        match file_type {
                            Some(other) if other != self.kernel_type => {
                                group.deps = Some(Dependency::new(other, pattern));
                            }
                            _ => push_unique(&mut group.kernels, pattern),
                        }
                        State::InSpecialGroup(group)
                    }
                    plain => {
                        push_unique(&mut self.kernels, pattern);
                        plain
                    }
                }
            }

            // A new Group without End_Group also ends the scope.
            (Marker::GroupEnd | Marker::GroupStart, State::InSpecialGroup(group)) => {
                let in_object = group.in_object;
                self.close(group);
                if in_object {
                    State::InObject
                } else {
                    State::Outside
                }
            }

            (Marker::ObjectStart, state) => {
                if let State::InSpecialGroup(group) = state {
                    self.close(group);
                }
                State::InObject
            }

            (Marker::ObjectEnd, state) => {
                if let State::InSpecialGroup(group) = state {
                    self.close(group);
                }
                State::Outside
            }

            (Marker::GroupStart | Marker::GroupEnd | Marker::Other, state) => state,
        };
    }

    fn close(&mut self, group: OpenGroup) {
        if group.is_empty() {
            return;
        }
        self.special_cases.push(SpecialCaseGroup {
            key: group.key,
            kernel_type: self.kernel_type.to_string(),
            record: KernelTypeRecord {
                kernels: group.kernels,
                deps: group.deps,
                ..KernelTypeRecord::default()
            },
        });
    }

    fn finish(mut self) -> ParsedDescription {
        if let State::InSpecialGroup(group) = std::mem::replace(&mut self.state, State::Outside) {
            self.close(group);
        }

        ParsedDescription {
            kernel_type: self.kernel_type.to_string(),
            record: (!self.kernels.is_empty())
                .then(|| KernelTypeRecord::with_kernels(self.kernels)),
            special_cases: self.special_cases,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
