//! Status-update validation and deduplication.

use std::collections::HashMap;

use feed_model::{Result, SourceTable, StatusUpdateRecord};
use feed_vocab::Vocabulary;
use tracing::debug;

use crate::common;
use crate::datetime::parse_datetime;

/// Validate and canonicalize the status-update table, then collapse the
/// history to the single most recent row per specimen.
pub fn validate_status_updates(
    records: Vec<StatusUpdateRecord>,
    vocab: &Vocabulary,
) -> Result<Vec<StatusUpdateRecord>> {
    let mut records = records;
    for record in &mut records {
        record.site_name = record
            .site_name
            .take()
            .and_then(|raw| vocab.facility_bucket(&raw).map(str::to_string));
    }

    common::canonicalize_statuses(
        SourceTable::StatusUpdate,
        &mut records,
        vocab,
        |record| &record.specimen_id,
        |record| record.status.as_deref(),
        |record, canonical| record.status = Some(canonical),
    )?;

    Ok(dedupe_latest(records))
}

/// Retain exactly one row per specimen id: the one with the maximum update
/// timestamp, ties broken by input order (latest wins).
///
/// Implemented as a stable sort by timestamp ascending followed by keeping
/// the last row per group, so equal timestamps resolve reproducibly given
/// identical input ordering. Unparsable timestamps sort first.
pub fn dedupe_latest(records: Vec<StatusUpdateRecord>) -> Vec<StatusUpdateRecord> {
    let before = records.len();
    let mut keyed: Vec<(Option<chrono::NaiveDateTime>, StatusUpdateRecord)> = records
        .into_iter()
        .map(|record| {
            let stamp = record.date_updated.as_deref().and_then(parse_datetime);
            (stamp, record)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut latest: HashMap<String, usize> = HashMap::new();
    for (index, (_, record)) in keyed.iter().enumerate() {
        latest.insert(record.specimen_id.clone(), index);
    }
    let deduped: Vec<StatusUpdateRecord> = keyed
        .into_iter()
        .enumerate()
        .filter(|(index, (_, record))| latest.get(&record.specimen_id) == Some(index))
        .map(|(_, (_, record))| record)
        .collect();
    if deduped.len() < before {
        debug!(
            collapsed = before - deduped.len(),
            "collapsed status-update history rows"
        );
    }
    deduped
}
