//! Immutable vocabulary lookups built from the static tables.

use std::collections::{HashMap, HashSet};

use crate::data;

/// Sentinel source code meaning "whole blood": specimen type for these rows
/// is derived from the container-type lookup instead of the source lookup.
pub const WHOLE_BLOOD_SOURCE: &str = "WB";

/// The canonical status that routes a row to the in-inventory partitions.
pub const IN_INVENTORY: &str = "In Inventory";

/// All vocabulary lookups, built once and injected into the transforms.
///
/// Holding the tables as a value (rather than process-wide constants) keeps
/// them versionable and lets tests construct reduced vocabularies.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    status: HashMap<String, String>,
    facility: HashMap<String, String>,
    analysis: HashMap<String, String>,
    source: HashMap<String, String>,
    /// Keyed by ASCII-lowercased container label.
    container: HashMap<String, String>,
    analysis_types: HashSet<String>,
    specimen_types: HashSet<String>,
    p3_studies: HashSet<String>,
}

fn owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn owned_set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Vocabulary {
    /// Build the vocabulary from the built-in static tables.
    pub fn builtin() -> Self {
        // Container keys are lowercased at construction so lookups are case
        // insensitive; later table entries win on a case collision, matching
        // the table's declaration order.
        let mut container = HashMap::new();
        for (key, value) in data::CONTAINER {
            container.insert(key.to_ascii_lowercase(), (*value).to_string());
        }
        Self {
            status: owned_map(data::STATUS),
            facility: owned_map(data::FACILITY),
            analysis: owned_map(data::ANALYSIS),
            source: owned_map(data::SOURCE),
            container,
            analysis_types: owned_set(data::ANALYSIS_TYPES),
            specimen_types: owned_set(data::SPECIMEN_TYPES),
            p3_studies: owned_set(data::P3_STUDIES),
        }
    }

    /// Canonical status for a raw lifecycle code. `None` means the raw value
    /// is outside the closed status domain, which the caller must treat as a
    /// validation failure.
    pub fn canonical_status(&self, raw: &str) -> Option<&str> {
        self.status.get(raw).map(String::as_str)
    }

    /// Organizational bucket for a raw facility name. Unmapped names return
    /// `None`; this table is incomplete by nature and must not block a batch.
    pub fn facility_bucket(&self, raw: &str) -> Option<&str> {
        self.facility.get(raw).map(String::as_str)
    }

    /// Corrected analysis-type label; values outside the correction table
    /// pass through unchanged.
    pub fn analysis_type(&self, raw: &str) -> String {
        self.analysis
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    /// Two-path specimen-type derivation.
    ///
    /// Whole-blood rows take the container-type lookup (case-insensitive);
    /// everything else takes the source-code lookup, with unmapped source
    /// codes passing through unchanged. A whole-blood row whose container
    /// label is unknown falls back to the source path.
    pub fn specimen_type(
        &self,
        source: Option<&str>,
        container_type: Option<&str>,
    ) -> Option<String> {
        let source = source?;
        if source == WHOLE_BLOOD_SOURCE {
            if let Some(container) = container_type {
                if let Some(mapped) = self.container.get(&container.to_ascii_lowercase()) {
                    return Some(mapped.clone());
                }
            }
        }
        Some(
            self.source
                .get(source)
                .cloned()
                .unwrap_or_else(|| source.to_string()),
        )
    }

    pub fn is_known_analysis_type(&self, value: &str) -> bool {
        self.analysis_types.contains(value)
    }

    pub fn is_known_specimen_type(&self, value: &str) -> bool {
        self.specimen_types.contains(value)
    }

    pub fn is_p3_study(&self, study: &str) -> bool {
        self.p3_studies.contains(study)
    }
}
