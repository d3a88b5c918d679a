//! Aliquot-table validation and normalization.

use feed_model::{AliquotRecord, Result, SourceTable};
use feed_vocab::Vocabulary;
use tracing::debug;

use crate::common;
use crate::options::ValidationOptions;

/// Aliquots in this container format are never exported.
const BLOOD_SPOT_CONTAINER: &str = "BloodSpotCard";

/// Validate and normalize the aliquot table. Same fail-fast status semantics
/// as accessioning.
pub fn validate_aliquots(
    records: Vec<AliquotRecord>,
    vocab: &Vocabulary,
    options: &ValidationOptions,
) -> Result<Vec<AliquotRecord>> {
    let before = records.len();
    let mut records: Vec<AliquotRecord> = records
        .into_iter()
        .filter(|record| record.container_type.as_deref() != Some(BLOOD_SPOT_CONTAINER))
        .filter(|record| {
            !common::is_unresolvable_whole_blood(
                record.source.as_deref(),
                record.container_type.as_deref(),
            )
        })
        .collect();
    if records.len() < before {
        debug!(dropped = before - records.len(), "dropped unexportable aliquot rows");
    }

    for record in &mut records {
        record.specimen_type =
            vocab.specimen_type(record.source.as_deref(), record.container_type.as_deref());
    }

    common::canonicalize_statuses(
        SourceTable::Aliquot,
        &mut records,
        vocab,
        |record| &record.specimen_id,
        |record| record.status.as_deref(),
        |record, canonical| record.status = Some(canonical),
    )?;

    if options.enforce_specimen_types {
        common::check_domain(
            SourceTable::Aliquot,
            "Specimen Type",
            &records,
            |record| &record.specimen_id,
            |record| record.specimen_type.as_deref(),
            |value| vocab.is_known_specimen_type(value),
        )?;
    }

    Ok(records)
}
