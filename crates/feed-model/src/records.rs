//! Typed rows for the four source tables.
//!
//! Every record is keyed by an opaque specimen id, unique within its source
//! table. Optional fields stay `None` end-to-end; "no value" is never coerced
//! to zero or an empty string before export serialization.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SourceTable {
    Accessioning,
    Aliquot,
    QualityControl,
    StatusUpdate,
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceTable::Accessioning => "Accessioning",
            SourceTable::Aliquot => "Aliquot",
            SourceTable::QualityControl => "Quality Control",
            SourceTable::StatusUpdate => "Status Updates",
        };
        f.write_str(name)
    }
}

/// The primary record of a specimen's creation at intake. Read-only input:
/// this pipeline never updates it in place.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccessioningRecord {
    pub specimen_id: String,
    pub analysis_type: Option<String>,
    pub source: Option<String>,
    pub container_type: Option<String>,
    pub status: Option<String>,
    /// Derived during validation from source code / container type; never
    /// read directly from the source row.
    pub specimen_type: Option<String>,
    pub origination_facility: Option<String>,
    pub destination_facility: Option<String>,
    pub site_name: Option<String>,
    pub site: Option<String>,
    pub randomization_id: Option<String>,
    pub screening_number: Option<String>,
    pub comments: Option<String>,
    pub study_number: Option<String>,
    pub visit: Option<String>,
    pub vendor_specimen_id: Option<String>,
    pub created_on: Option<String>,
    pub date_received: Option<String>,
    pub draw_date: Option<String>,
    pub draw_time: Option<String>,
}

/// A specimen derived from a parent specimen.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AliquotRecord {
    pub specimen_id: String,
    /// Lineage pointer to the originating accessioned specimen. Non-owning:
    /// many aliquots may share one parent, and the reference is never itself
    /// authoritative data.
    pub ultimate_parent: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub container_type: Option<String>,
    pub specimen_type: Option<String>,
    pub vendor_specimen_id: Option<String>,
    pub created_on: Option<String>,
}

/// Raw quality-control measurement for an aliquot (1:1 expected, not
/// enforced).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QualityControlRecord {
    pub specimen_id: String,
    pub concentration: Option<f64>,
    pub vol_avg: Option<f64>,
    pub volume_unit: Option<String>,
    pub purity: Option<String>,
}

/// Quality-control measurement after quantitative normalization: volume in
/// microliters, concentration in ng/µL, values rendered as fixed-point text
/// with three decimals.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QcMeasurement {
    pub specimen_id: String,
    pub concentration: Option<String>,
    pub volume: Option<String>,
    pub volume_unit: Option<String>,
    pub concentration_unit: Option<String>,
    pub nucleic_yield: Option<String>,
    pub purity: Option<String>,
}

/// One row of a specimen's status history. The table may carry multiple rows
/// per specimen; only the most recent survives deduplication.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdateRecord {
    pub specimen_id: String,
    pub status: Option<String>,
    pub site_name: Option<String>,
    pub stored_date: Option<String>,
    pub shipped_date: Option<String>,
    pub disposed_date: Option<String>,
    pub date_updated: Option<String>,
}
