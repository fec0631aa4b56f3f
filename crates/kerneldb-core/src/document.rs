//! # Mission Document
//!
//! The single artifact a compilation produces:
//!
//! ```text
//! {
//!   "<mission>":        { "<kernelType>": KernelTypeRecord, ... },
//!   "<specialCaseKey>": { "<kernelType>": KernelTypeRecord, ... }
//! }
//! ```
//!
//! All merging happens here, under one rule: the first writer of an entry
//! wins and later writers are discarded. A special-case key equal to the
//! mission name collides with the mission entry and is discarded too.
//!
//! Entries live in `BTreeMap`s, so serialization order is deterministic.

use crate::{KernelDbError, KernelTypeRecord, ParsedDescription, SpecialCaseGroup, Warning};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Records of one top-level entry, keyed by kernel type.
pub type KernelTypeMap = BTreeMap<String, KernelTypeRecord>;

/// The compiled configuration of one mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDocument {
    mission: String,
    entries: BTreeMap<String, KernelTypeMap>,
}

impl MissionDocument {
    /// Create a document holding only an empty mission entry.
    #[must_use]
    pub fn new(mission: impl Into<String>) -> Self {
        let mission = mission.into();
        let mut entries = BTreeMap::new();
        entries.insert(mission.clone(), KernelTypeMap::new());
        Self { mission, entries }
    }

    /// Rebuild a document from top-level entries.
    ///
    /// The entries must contain the mission key.
    pub fn from_entries(
        mission: impl Into<String>,
        entries: BTreeMap<String, KernelTypeMap>,
    ) -> Result<Self, KernelDbError> {
        let mission = mission.into();
        if !entries.contains_key(&mission) {
            return Err(KernelDbError::SerializationError(format!(
                "Document has no entry for mission '{}'",
                mission
            )));
        }
        Ok(Self { mission, entries })
    }

    /// The mission name.
    #[must_use]
    pub fn mission(&self) -> &str {
        &self.mission
    }

    /// Records of the mission itself.
    #[must_use]
    pub fn records(&self) -> &KernelTypeMap {
        // The mission entry is inserted on construction and never removed.
        static EMPTY: KernelTypeMap = KernelTypeMap::new();
        self.entries.get(&self.mission).unwrap_or(&EMPTY)
    }

    /// Record of one kernel type of the mission.
    #[must_use]
    pub fn record(&self, kernel_type: &str) -> Option<&KernelTypeRecord> {
        self.records().get(kernel_type)
    }

    /// Records lifted under a special-case key.
    #[must_use]
    pub fn special_case(&self, key: &str) -> Option<&KernelTypeMap> {
        if key == self.mission {
            return None;
        }
        self.entries.get(key)
    }

    /// Special-case keys, sorted.
    pub fn special_case_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(move |key| *key != self.mission)
    }

    /// Insert a mission record unless the kernel type already has one.
    ///
    /// Returns `false` when the record was discarded.
    pub fn insert_record(&mut self, kernel_type: &str, record: KernelTypeRecord) -> bool {
        let records = self.entries.entry(self.mission.clone()).or_default();
        if records.contains_key(kernel_type) {
            return false;
        }
        records.insert(kernel_type.to_string(), record);
        true
    }

    /// Lift a special-case group to the top level unless its entry exists.
    ///
    /// Returns `false` when the group was discarded.
    pub fn insert_special_case(&mut self, group: SpecialCaseGroup) -> bool {
        if group.key == self.mission {
            return false;
        }
        let records = self.entries.entry(group.key).or_default();
        if records.contains_key(&group.kernel_type) {
            return false;
        }
        records.insert(group.kernel_type, group.record);
        true
    }

    /// Merge everything a parser produced for one kernel type.
    ///
    /// Returns a warning for every discarded entry.
    pub fn merge(&mut self, parsed: ParsedDescription) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if let Some(record) = parsed.record {
            if !self.insert_record(&parsed.kernel_type, record) {
                warnings.push(Warning::DiscardedDuplicate {
                    key: self.mission.clone(),
                    kernel_type: parsed.kernel_type.clone(),
                });
            }
        }

        for group in parsed.special_cases {
            let key = group.key.clone();
            let kernel_type = group.kernel_type.clone();
            if !self.insert_special_case(group) {
                warnings.push(Warning::DiscardedDuplicate { key, kernel_type });
            }
        }

        warnings
    }
}

impl Serialize for MissionDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

// =============================================================================
// TESTS
// =============================================================================
