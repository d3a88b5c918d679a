//! Accessioning and aliquot validation tests.

use feed_model::{AccessioningRecord, AliquotRecord, FeedError, SourceTable};
use feed_transform::{ValidationOptions, validate_accessioning, validate_aliquots};
use feed_vocab::Vocabulary;

fn accession(id: &str) -> AccessioningRecord {
    AccessioningRecord {
        specimen_id: id.to_string(),
        status: Some("Stored".to_string()),
        ..AccessioningRecord::default()
    }
}

fn aliquot(id: &str, parent: &str) -> AliquotRecord {
    AliquotRecord {
        specimen_id: id.to_string(),
        ultimate_parent: Some(parent.to_string()),
        status: Some("Stored".to_string()),
        ..AliquotRecord::default()
    }
}

#[test]
fn randomization_and_screening_ids_zero_pad() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.randomization_id = Some("42".to_string());
    record.screening_number = Some("7".to_string());
    let out =
        validate_accessioning(vec![record], &vocab, &ValidationOptions::default()).unwrap();
    assert_eq!(out[0].randomization_id.as_deref(), Some("000042"));
    assert_eq!(out[0].screening_number.as_deref(), Some("000000007"));
}

#[test]
fn absent_ids_stay_null_not_padded_zeros() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.randomization_id = Some(String::new());
    let out =
        validate_accessioning(vec![record], &vocab, &ValidationOptions::default()).unwrap();
    assert_eq!(out[0].randomization_id, None);
    assert_eq!(out[0].screening_number, None);
}

#[test]
fn numeric_site_renders_four_digit_padded() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.site = Some("12".to_string());
    let out =
        validate_accessioning(vec![record], &vocab, &ValidationOptions::default()).unwrap();
    assert_eq!(out[0].site.as_deref(), Some("0012"));
}

#[test]
fn non_numeric_site_aborts_the_table() {
    let vocab = Vocabulary::builtin();
    let mut bad = accession("a1");
    bad.site = Some("HQ".to_string());
    let mut also_bad = accession("a2");
    also_bad.site = Some("north".to_string());
    let error = validate_accessioning(
        vec![bad, accession("a3"), also_bad],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap_err();
    match error {
        FeedError::Validation {
            table: SourceTable::Accessioning,
            field: "Site ID",
            specimen_ids,
        } => assert_eq!(specimen_ids, vec!["a1".to_string(), "a2".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn comments_truncate_to_250_chars() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.comments = Some("x".repeat(400));
    let out =
        validate_accessioning(vec![record], &vocab, &ValidationOptions::default()).unwrap();
    assert_eq!(out[0].comments.as_ref().unwrap().chars().count(), 250);
}

#[test]
fn accession_status_maps_to_canonical() {
    let vocab = Vocabulary::builtin();
    let out = validate_accessioning(vec![accession("a1")], &vocab, &ValidationOptions::default())
        .unwrap();
    assert_eq!(out[0].status.as_deref(), Some("In Inventory"));
}

#[test]
fn unmappable_accession_status_names_offenders() {
    let vocab = Vocabulary::builtin();
    let mut bad = accession("a2");
    bad.status = Some("Vanished".to_string());
    let mut missing = accession("a3");
    missing.status = None;
    let error = validate_accessioning(
        vec![accession("a1"), bad, missing],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap_err();
    match error {
        FeedError::Validation {
            field: "Status",
            specimen_ids,
            ..
        } => assert_eq!(specimen_ids, vec!["a2".to_string(), "a3".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn origination_facility_buckets_or_nulls() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.origination_facility = Some("Celerion-Nebraska".to_string());
    let mut unknown = accession("a2");
    unknown.origination_facility = Some("Fresh Partner Site".to_string());
    let out = validate_accessioning(vec![record, unknown], &vocab, &ValidationOptions::default())
        .unwrap();
    assert_eq!(out[0].origination_facility.as_deref(), Some("Celerion"));
    assert_eq!(out[1].origination_facility, None);
}

#[test]
fn specimen_type_derivation_two_paths() {
    let vocab = Vocabulary::builtin();
    let mut by_source = accession("a1");
    by_source.source = Some("PL".to_string());
    let mut whole_blood = accession("a2");
    whole_blood.source = Some("WB".to_string());
    whole_blood.container_type = Some("4.0 mL Purple Top Tube".to_string());
    let out = validate_accessioning(
        vec![by_source, whole_blood],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(out[0].specimen_type.as_deref(), Some("Plasma"));
    assert_eq!(out[1].specimen_type.as_deref(), Some("Whole Blood EDTA - DNA"));
}

#[test]
fn unresolvable_whole_blood_rows_are_dropped() {
    let vocab = Vocabulary::builtin();
    let mut dropped = accession("a1");
    dropped.source = Some("WB".to_string());
    dropped.container_type = Some("Micronic 1.4".to_string());
    let out = validate_accessioning(
        vec![dropped, accession("a2")],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].specimen_id, "a2");
}

#[test]
fn analysis_type_check_is_off_by_default_and_toggleable() {
    let vocab = Vocabulary::builtin();
    let mut record = accession("a1");
    record.analysis_type = Some("Mystery Panel".to_string());
    // Off by default: out-of-vocabulary value flows through.
    let out = validate_accessioning(
        vec![record.clone()],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(out[0].analysis_type.as_deref(), Some("Mystery Panel"));
    // Toggled on: the same row fails, named by specimen id.
    let options = ValidationOptions {
        enforce_analysis_types: true,
        ..ValidationOptions::default()
    };
    let error = validate_accessioning(vec![record], &vocab, &options).unwrap_err();
    match error {
        FeedError::Validation {
            field: "Analysis Type",
            specimen_ids,
            ..
        } => assert_eq!(specimen_ids, vec!["a1".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blood_spot_aliquots_are_dropped() {
    let vocab = Vocabulary::builtin();
    let mut dropped = aliquot("q1", "a1");
    dropped.container_type = Some("BloodSpotCard".to_string());
    let out = validate_aliquots(
        vec![dropped, aliquot("q2", "a1")],
        &vocab,
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].specimen_id, "q2");
}

#[test]
fn aliquot_status_maps_and_fails_fast() {
    let vocab = Vocabulary::builtin();
    let out = validate_aliquots(vec![aliquot("q1", "a1")], &vocab, &ValidationOptions::default())
        .unwrap();
    assert_eq!(out[0].status.as_deref(), Some("In Inventory"));

    let mut bad = aliquot("q2", "a1");
    bad.status = Some("Melted".to_string());
    let error =
        validate_aliquots(vec![bad], &vocab, &ValidationOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        FeedError::Validation {
            table: SourceTable::Aliquot,
            field: "Status",
            ..
        }
    ));
}
