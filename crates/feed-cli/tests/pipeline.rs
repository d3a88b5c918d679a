//! End-to-end pipeline tests over a filesystem snapshot.

use std::fs;
use std::path::Path;

use feed_cli::pipeline::{RunConfig, run};
use feed_transform::ValidationOptions;
use serde_json::json;

fn write_snapshot(dir: &Path) {
    fs::write(
        dir.join("accessioning.json"),
        json!([{
            "inventory_code": "8000000001",
            "status": "Stored",
            "study_name": "MK9999999",
            "source": "PL",
            "created_on": "2023-01-02 10:00:00",
            "meta": {"site": "12", "randomization_id": 42}
        }])
        .to_string(),
    )
    .unwrap();
    fs::write(
        dir.join("aliquot.json"),
        json!([{
            "inventory_code": "8000000001-A1",
            "ultimate_parent": "8000000001",
            "status": "Stored",
            "source": "DNA-WB",
            "aliquot_created_on": "2023-01-05 10:00:00",
            "meta": {}
        }])
        .to_string(),
    )
    .unwrap();
    fs::write(
        dir.join("quality_control.json"),
        json!([{
            "inventory_code": "8000000001-A1",
            "concentration": 2.0,
            "vol_avg": 1.0,
            "volume_unit": "mL",
            "meta": {}
        }])
        .to_string(),
    )
    .unwrap();
    fs::write(dir.join("status_updates.json"), json!([]).to_string()).unwrap();
}

fn config(dir: &Path) -> RunConfig {
    RunConfig {
        snapshot_dir: dir.to_path_buf(),
        output_dir: dir.join("export"),
        prefix: "FEED".to_string(),
        timestamp: Some("20230101_000000".to_string()),
        options: ValidationOptions::default(),
    }
}

#[test]
fn snapshot_produces_four_partitions() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());
    let summary = run(&config(dir.path())).unwrap();

    // One chain row plus the standalone accession copy.
    assert_eq!(summary.reconciled_rows, 2);
    assert_eq!(summary.partitions.len(), 4);
    assert_eq!(summary.partitions[0].1, 2); // non-cohort, In Inventory
    assert_eq!(summary.partitions[1].1, 0);

    let inv = dir
        .path()
        .join("export")
        .join("FEED_INV_Sampled_20230101_000000.csv");
    let content = fs::read_to_string(&inv).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Analysis Type,Assay,"));
    let first = lines.next().unwrap();
    assert!(first.contains("In Inventory"));
    assert!(first.contains("01/02/2023") || first.contains("01/05/2023"));
    // Yield = 1000 µL × 2 ng/µL / 1000.
    assert!(first.contains("2.000"));
    assert!(first.contains("IBX"));
    // Padded metadata from the flattened meta block.
    assert!(first.contains("000042"));
    assert!(first.contains("0012"));

    // Empty partitions still deliver, header only.
    let ninv = dir
        .path()
        .join("export")
        .join("FEED_NINV_Sampled_20230101_000000.csv");
    assert_eq!(fs::read_to_string(&ninv).unwrap().lines().count(), 1);
}

#[test]
fn rerun_with_same_timestamp_is_a_delivery_conflict() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());
    run(&config(dir.path())).unwrap();
    let error = run(&config(dir.path())).unwrap_err();
    assert!(error.to_string().contains("delivery failed"));
}

#[test]
fn bad_status_fails_before_anything_is_delivered() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());
    fs::write(
        dir.path().join("status_updates.json"),
        json!([{
            "inventory_code": "8000000001",
            "status": "Teleported",
            "date_updated": "2023-01-01 00:00:00"
        }])
        .to_string(),
    )
    .unwrap();
    let error = run(&config(dir.path())).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("8000000001"));
    assert!(!dir.path().join("export").exists() || fs::read_dir(dir.path().join("export")).unwrap().next().is_none());
}
