//! The cross-table join engine.
//!
//! Join sequence, in this exact order:
//! 1. Aliquot ⋈ QualityControl on specimen id (inner).
//! 2. (1) ⋈ Accessioning on the aliquot's ultimate-parent pointer (inner).
//! 3. Union with the entire accessioning table standalone. A parent specimen
//!    can therefore appear twice (once bare, once per resolving chain); rows
//!    carry an origin tag so downstream can tell the copies apart.
//! 4. Left join with the deduplicated status updates on the compound key
//!    (specimen id, canonical current status). Status dates only attach when
//!    the update's own canonical status matches the row's current status; a
//!    specimen whose status has since moved on gets no dates for the new
//!    status.
//!
//! None of the steps can fail: all correctness-critical validation happened
//! per table before reconciliation runs.

use std::collections::HashMap;

use feed_model::{
    AccessioningRecord, AliquotRecord, ExportRecord, QcMeasurement, RecordOrigin,
    StatusUpdateRecord,
};
use tracing::{debug, info};

/// Build the reconciled superset from the four validated tables. Status
/// updates must already be deduplicated to one row per specimen.
pub fn reconcile(
    accessioning: &[AccessioningRecord],
    aliquots: &[AliquotRecord],
    measurements: &[QcMeasurement],
    status_updates: &[StatusUpdateRecord],
) -> Vec<ExportRecord> {
    let mut qc_by_id: HashMap<&str, Vec<&QcMeasurement>> = HashMap::new();
    for measurement in measurements {
        qc_by_id
            .entry(measurement.specimen_id.as_str())
            .or_default()
            .push(measurement);
    }
    let acc_by_id: HashMap<&str, &AccessioningRecord> = accessioning
        .iter()
        .map(|record| (record.specimen_id.as_str(), record))
        .collect();

    let mut rows = Vec::new();

    // Steps 1-2: aliquot chains. Aliquots without a QC match, and chains
    // whose parent accession record is missing, drop out entirely.
    for aliquot in aliquots {
        let Some(matches) = qc_by_id.get(aliquot.specimen_id.as_str()) else {
            continue;
        };
        let Some(parent) = aliquot
            .ultimate_parent
            .as_deref()
            .and_then(|id| acc_by_id.get(id))
        else {
            continue;
        };
        for measurement in matches {
            rows.push(chain_row(aliquot, measurement, parent));
        }
    }
    let chain_count = rows.len();

    // Step 3: every accessioning record standalone, unfiltered.
    for record in accessioning {
        rows.push(standalone_row(record));
    }
    debug!(
        chains = chain_count,
        standalone = accessioning.len(),
        "built pre-status-join record set"
    );

    // Step 4: attach status dates on the compound key.
    let su_by_key: HashMap<(&str, &str), &StatusUpdateRecord> = status_updates
        .iter()
        .filter_map(|update| {
            let status = update.status.as_deref()?;
            Some(((update.specimen_id.as_str(), status), update))
        })
        .collect();
    let mut attached = 0usize;
    for row in &mut rows {
        let key = (row.specimen_id.as_str(), row.current_status.as_str());
        if let Some(update) = su_by_key.get(&key) {
            row.stored_date = update.stored_date.clone();
            row.shipped_date = update.shipped_date.clone();
            row.terminal_date = update.disposed_date.clone();
            attached += 1;
        }
    }

    info!(rows = rows.len(), status_matches = attached, "reconciliation complete");
    rows
}

fn chain_row(
    aliquot: &AliquotRecord,
    measurement: &QcMeasurement,
    parent: &AccessioningRecord,
) -> ExportRecord {
    ExportRecord {
        origin: RecordOrigin::DerivedFromAliquot,
        // Aliquot-level identity and state win over the parent's.
        specimen_id: aliquot.specimen_id.clone(),
        current_status: aliquot.status.clone().unwrap_or_default(),
        parent_specimen_id: aliquot.ultimate_parent.clone(),
        container_type: aliquot.container_type.clone(),
        specimen_type: aliquot.specimen_type.clone(),
        created_date: aliquot.created_on.clone(),
        // Accession-level context comes from the ultimate parent.
        analysis_type: parent.analysis_type.clone(),
        collection_date: parent.draw_date.clone(),
        collection_time: parent.draw_time.clone(),
        received_date: parent.date_received.clone(),
        origination_facility: parent.origination_facility.clone(),
        destination_facility: parent.destination_facility.clone(),
        randomization_id: parent.randomization_id.clone(),
        screening_id: parent.screening_number.clone(),
        site_id: parent.site.clone(),
        comments: parent.comments.clone(),
        study_number: parent.study_number.clone(),
        visit: parent.visit.clone(),
        // Measurements from the QC branch.
        concentration: measurement.concentration.clone(),
        volume: measurement.volume.clone(),
        nucleic_yield: measurement.nucleic_yield.clone(),
        purity: measurement.purity.clone(),
        stored_date: None,
        shipped_date: None,
        terminal_date: None,
    }
}

fn standalone_row(record: &AccessioningRecord) -> ExportRecord {
    ExportRecord {
        origin: RecordOrigin::Standalone,
        specimen_id: record.specimen_id.clone(),
        current_status: record.status.clone().unwrap_or_default(),
        parent_specimen_id: None,
        container_type: record.container_type.clone(),
        specimen_type: record.specimen_type.clone(),
        created_date: record.created_on.clone(),
        analysis_type: record.analysis_type.clone(),
        collection_date: record.draw_date.clone(),
        collection_time: record.draw_time.clone(),
        received_date: record.date_received.clone(),
        origination_facility: record.origination_facility.clone(),
        destination_facility: record.destination_facility.clone(),
        randomization_id: record.randomization_id.clone(),
        screening_id: record.screening_number.clone(),
        site_id: record.site.clone(),
        comments: record.comments.clone(),
        study_number: record.study_number.clone(),
        visit: record.visit.clone(),
        concentration: None,
        volume: None,
        nucleic_yield: None,
        purity: None,
        stored_date: None,
        shipped_date: None,
        terminal_date: None,
    }
}
