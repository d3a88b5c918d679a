#![deny(unsafe_code)]

//! Per-table validation and normalization for the specimen inventory feed.
//!
//! Each source table gets one pass: vocabulary canonicalization and field
//! normalization for accessioning and aliquots, quantitative normalization
//! for quality control, and canonicalization plus history deduplication for
//! status updates. Validation is fail-fast per table: one unmappable status
//! (or non-numeric site) aborts the whole table, naming every offender.

mod accession;
mod aliquot;
mod common;
pub mod datetime;
pub mod numeric;
mod options;
mod qc;
mod status;

pub use accession::validate_accessioning;
pub use aliquot::validate_aliquots;
pub use options::ValidationOptions;
pub use qc::{CANONICAL_CONCENTRATION_UNIT, CANONICAL_VOLUME_UNIT, normalize_quality_control};
pub use status::{dedupe_latest, validate_status_updates};
