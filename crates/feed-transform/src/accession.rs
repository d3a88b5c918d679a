//! Accessioning-table validation and normalization.

use feed_model::{AccessioningRecord, FeedError, Result, SourceTable};
use feed_vocab::Vocabulary;
use tracing::debug;

use crate::common;
use crate::numeric::{parse_f64, zero_pad};
use crate::options::ValidationOptions;

const COMMENT_MAX_CHARS: usize = 250;

/// Validate and normalize the accessioning table.
///
/// Fail-fast: an unmappable status or a non-numeric site aborts the whole
/// table, and the error enumerates every offending specimen id.
pub fn validate_accessioning(
    records: Vec<AccessioningRecord>,
    vocab: &Vocabulary,
    options: &ValidationOptions,
) -> Result<Vec<AccessioningRecord>> {
    let before = records.len();
    let mut records: Vec<AccessioningRecord> = records
        .into_iter()
        .filter(|record| {
            !common::is_unresolvable_whole_blood(
                record.source.as_deref(),
                record.container_type.as_deref(),
            )
        })
        .collect();
    if records.len() < before {
        debug!(
            dropped = before - records.len(),
            "dropped unresolvable whole-blood accessioning rows"
        );
    }

    for record in &mut records {
        record.origination_facility = record
            .origination_facility
            .take()
            .and_then(|raw| vocab.facility_bucket(&raw).map(str::to_string));
        record.analysis_type = record
            .analysis_type
            .take()
            .map(|raw| vocab.analysis_type(&raw));
        record.specimen_type =
            vocab.specimen_type(record.source.as_deref(), record.container_type.as_deref());
    }

    common::canonicalize_statuses(
        SourceTable::Accessioning,
        &mut records,
        vocab,
        |record| &record.specimen_id,
        |record| record.status.as_deref(),
        |record, canonical| record.status = Some(canonical),
    )?;

    if options.enforce_analysis_types {
        common::check_domain(
            SourceTable::Accessioning,
            "Analysis Type",
            &records,
            |record| &record.specimen_id,
            |record| record.analysis_type.as_deref(),
            |value| vocab.is_known_analysis_type(value),
        )?;
    }
    if options.enforce_specimen_types {
        common::check_domain(
            SourceTable::Accessioning,
            "Specimen Type",
            &records,
            |record| &record.specimen_id,
            |record| record.specimen_type.as_deref(),
            |value| vocab.is_known_specimen_type(value),
        )?;
    }

    let mut site_offenders = Vec::new();
    for record in &mut records {
        record.randomization_id = record
            .randomization_id
            .take()
            .filter(|value| !value.trim().is_empty())
            .map(|value| zero_pad(&value, 6));
        record.screening_number = record
            .screening_number
            .take()
            .filter(|value| !value.trim().is_empty())
            .map(|value| zero_pad(&value, 9));
        record.site = match record.site.take() {
            Some(raw) if !raw.trim().is_empty() => match parse_f64(&raw) {
                Some(value) => Some(zero_pad(&(value.trunc() as i64).to_string(), 4)),
                None => {
                    site_offenders.push(record.specimen_id.clone());
                    None
                }
            },
            _ => None,
        };
        record.comments = record
            .comments
            .take()
            .filter(|value| !value.is_empty())
            .map(|value| value.chars().take(COMMENT_MAX_CHARS).collect());
    }
    if !site_offenders.is_empty() {
        return Err(FeedError::Validation {
            table: SourceTable::Accessioning,
            field: "Site ID",
            specimen_ids: site_offenders,
        });
    }

    Ok(records)
}
