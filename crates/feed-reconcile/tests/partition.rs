//! Export formatting and partitioning tests.

use feed_model::{AccessioningRecord, EXPORT_COLUMNS, ExportRecord, RecordOrigin};
use feed_reconcile::{format_export, partition, reconcile};
use feed_vocab::Vocabulary;

fn record(id: &str, status: &str, study: Option<&str>) -> ExportRecord {
    ExportRecord {
        origin: RecordOrigin::Standalone,
        specimen_id: id.to_string(),
        current_status: status.to_string(),
        parent_specimen_id: None,
        analysis_type: None,
        specimen_type: None,
        container_type: None,
        created_date: None,
        collection_date: None,
        collection_time: None,
        received_date: None,
        origination_facility: None,
        destination_facility: None,
        randomization_id: None,
        screening_id: None,
        site_id: None,
        comments: None,
        study_number: study.map(str::to_string),
        visit: None,
        concentration: None,
        volume: None,
        nucleic_yield: None,
        purity: None,
        stored_date: None,
        shipped_date: None,
        terminal_date: None,
    }
}

fn column(row: &[String], name: &str) -> String {
    let index = EXPORT_COLUMNS.iter().position(|c| *c == name).unwrap();
    row[index].clone()
}

#[test]
fn every_row_lands_in_exactly_one_partition() {
    let vocab = Vocabulary::builtin();
    let records = vec![
        record("r1", "In Inventory", Some("MK9999999")),
        record("r2", "In Transit", Some("MK9999999")),
        record("r3", "In Inventory", Some("MK8591002")),
        record("r4", "Exhausted", Some("MK8591002")),
        record("r5", "In Inventory", None),
    ];
    let partitions = partition(&records, &vocab, "FEED", "20230101_000000");
    assert_eq!(partitions.len(), 4);
    let total: usize = partitions.iter().map(|p| p.table.len()).sum();
    assert_eq!(total, records.len());
    // Absent study number routes with the non-cohort partitions.
    assert_eq!(partitions[0].table.len(), 2); // INV: r1, r5
    assert_eq!(partitions[1].table.len(), 1); // NINV: r2
    assert_eq!(partitions[2].table.len(), 1); // INV_P3: r3
    assert_eq!(partitions[3].table.len(), 1); // NINV_P3: r4
}

#[test]
fn artifact_names_encode_prefix_cohort_status_and_timestamp() {
    let vocab = Vocabulary::builtin();
    let partitions = partition(&[], &vocab, "FEED", "20230101_120000");
    let names: Vec<&str> = partitions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "FEED_INV_Sampled_20230101_120000.csv",
            "FEED_NINV_Sampled_20230101_120000.csv",
            "FEED_INV_Sampled_P3_20230101_120000.csv",
            "FEED_NINV_Sampled_P3_20230101_120000.csv",
        ]
    );
}

#[test]
fn formatter_fills_placeholders_and_formats_dates() {
    let mut one = record("r1", "In Inventory", Some("MK9999999"));
    one.created_date = Some("2023-01-05 09:15:00".to_string());
    one.collection_time = Some("2023-01-05 09:15:00".to_string());
    one.terminal_date = Some("garbage".to_string());
    let table = format_export(&[one]);
    assert_eq!(table.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row.len(), EXPORT_COLUMNS.len());
    assert_eq!(column(row, "Specimen ID"), "r1");
    assert_eq!(column(row, "Created Date"), "01/05/2023");
    assert_eq!(column(row, "Collection Time"), "09:15");
    // Unparsable dates become blank, never an error or sentinel.
    assert_eq!(column(row, "Terminal Date"), "");
    assert_eq!(column(row, "Vendor"), "IBX");
    assert_eq!(column(row, "Assay"), "");
    assert_eq!(column(row, "Vendor Specimen ID"), "");
    assert_eq!(column(row, "Terminal Date_su"), "");
    // Null numerics serialize blank, not zero.
    assert_eq!(column(row, "Nucleic Acid Yield"), "");
}

#[test]
fn end_to_end_chain_routes_to_non_cohort_inventory_partition() {
    let vocab = Vocabulary::builtin();
    let acc = AccessioningRecord {
        specimen_id: "a1".to_string(),
        status: Some("In Inventory".to_string()),
        study_number: Some("MK9999999".to_string()),
        ..AccessioningRecord::default()
    };
    let aliquot = feed_model::AliquotRecord {
        specimen_id: "q1".to_string(),
        ultimate_parent: Some("a1".to_string()),
        status: Some("In Inventory".to_string()),
        ..feed_model::AliquotRecord::default()
    };
    let qc = feed_model::QcMeasurement {
        specimen_id: "q1".to_string(),
        volume: Some("100.000".to_string()),
        volume_unit: Some("uL".to_string()),
        ..feed_model::QcMeasurement::default()
    };
    let rows = reconcile(&[acc], &[aliquot], &[qc], &[]);
    let partitions = partition(&rows, &vocab, "FEED", "20230101_000000");
    // Both copies (chain + standalone) are In Inventory, non-cohort.
    assert_eq!(partitions[0].table.len(), 2);
    assert_eq!(partitions[1].table.len(), 0);
    assert_eq!(partitions[2].table.len(), 0);
    assert_eq!(partitions[3].table.len(), 0);
}
