//! Tests for the vocabulary lookups.

use feed_vocab::{IN_INVENTORY, Vocabulary};

#[test]
fn status_domain_is_closed() {
    let vocab = Vocabulary::builtin();
    assert_eq!(vocab.canonical_status("Stored"), Some(IN_INVENTORY));
    assert_eq!(vocab.canonical_status("Shipped"), Some("In Transit"));
    assert_eq!(vocab.canonical_status("Disposed"), Some("Exhausted"));
    assert_eq!(vocab.canonical_status("Quarantine"), Some("In Inventory"));
    assert_eq!(vocab.canonical_status("NotAStatus"), None);
    // Lookups are exact: the raw codes are system identifiers, not free text.
    assert_eq!(vocab.canonical_status("stored"), None);
}

#[test]
fn facility_unmapped_is_null_not_failure() {
    let vocab = Vocabulary::builtin();
    assert_eq!(vocab.facility_bucket("Celerion-Nebraska"), Some("Celerion"));
    assert_eq!(
        vocab.facility_bucket("LabCorp Drug Development-USA"),
        Some("Lab Corp")
    );
    assert_eq!(vocab.facility_bucket("Brand New Partner Clinic"), None);
}

#[test]
fn analysis_type_corrections_pass_through_unknowns() {
    let vocab = Vocabulary::builtin();
    assert_eq!(vocab.analysis_type("Genetic Anaylsis"), "Genetic Analysis");
    assert_eq!(vocab.analysis_type("RNA analysis"), "RNA Analysis");
    // Unknown labels flow through unchanged (latent check, off by default).
    assert_eq!(vocab.analysis_type("Mystery Panel"), "Mystery Panel");
}

#[test]
fn specimen_type_source_path() {
    let vocab = Vocabulary::builtin();
    assert_eq!(vocab.specimen_type(Some("PL"), None).as_deref(), Some("Plasma"));
    assert_eq!(
        vocab.specimen_type(Some("BUC"), Some("4.0 mL Purple Top Tube")),
        Some("Buccal Swab".to_string())
    );
    // Unmapped source codes pass through unchanged.
    assert_eq!(
        vocab.specimen_type(Some("XYZ"), None).as_deref(),
        Some("XYZ")
    );
    assert_eq!(vocab.specimen_type(None, Some("10 mL Paxgene DNA")), None);
}

#[test]
fn specimen_type_whole_blood_uses_container_case_insensitively() {
    let vocab = Vocabulary::builtin();
    assert_eq!(
        vocab
            .specimen_type(Some("WB"), Some("10.0 mL Purple Top Tube"))
            .as_deref(),
        Some("Whole Blood EDTA - DNA")
    );
    assert_eq!(
        vocab
            .specimen_type(Some("WB"), Some("10.0 ML PURPLE TOP TUBE"))
            .as_deref(),
        Some("Whole Blood EDTA - DNA")
    );
}

#[test]
fn ambiguous_container_maps_to_manual_review_value() {
    let vocab = Vocabulary::builtin();
    // These container labels disagree between the two lookup tables in the
    // source data; they forward to a manual-review value instead of failing.
    assert_eq!(
        vocab.specimen_type(Some("WB"), Some("Sarstedt 2.0")).as_deref(),
        Some("request Specimen Type from Merck")
    );
}

#[test]
fn whole_blood_unknown_container_falls_back_to_source_path() {
    let vocab = Vocabulary::builtin();
    // "WB" is absent from the source table, so the fallback passes the raw
    // code through; only the toggleable specimen-type check would catch it.
    assert_eq!(
        vocab
            .specimen_type(Some("WB"), Some("Never Seen Container"))
            .as_deref(),
        Some("WB")
    );
}

#[test]
fn enumerated_domains() {
    let vocab = Vocabulary::builtin();
    assert!(vocab.is_known_analysis_type("Genetic Analysis"));
    assert!(!vocab.is_known_analysis_type("Mystery Panel"));
    assert!(vocab.is_known_specimen_type("Plasma"));
    assert!(!vocab.is_known_specimen_type("WB"));
}

#[test]
fn p3_cohort_membership() {
    let vocab = Vocabulary::builtin();
    assert!(vocab.is_p3_study("MK8591002"));
    assert!(vocab.is_p3_study("P04103"));
    assert!(!vocab.is_p3_study("MK9999999"));
}
