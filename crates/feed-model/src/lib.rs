#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod records;

pub use error::{FeedError, Result};
pub use export::{EXPORT_COLUMNS, ExportRecord, ExportTable, RecordOrigin};
pub use records::{
    AccessioningRecord, AliquotRecord, QcMeasurement, QualityControlRecord, SourceTable,
    StatusUpdateRecord,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_every_offender() {
        let error = FeedError::Validation {
            table: SourceTable::Accessioning,
            field: "Status",
            specimen_ids: vec!["8000000001".to_string(), "8000000002".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "incorrect Status (Accessioning): 8000000001, 8000000002"
        );
    }

    #[test]
    fn export_schema_shape() {
        assert_eq!(EXPORT_COLUMNS.len(), 46);
        assert_eq!(EXPORT_COLUMNS[0], "Analysis Type");
        assert!(EXPORT_COLUMNS.contains(&"Terminal Date_su"));
    }

    #[test]
    fn export_record_round_trips() {
        let record = ExportRecord {
            origin: RecordOrigin::Standalone,
            specimen_id: "8000000001".to_string(),
            current_status: "In Inventory".to_string(),
            parent_specimen_id: None,
            analysis_type: Some("Genetic Analysis".to_string()),
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
            study_number: None,
            visit: None,
            concentration: None,
            volume: None,
            nucleic_yield: None,
            purity: None,
            stored_date: None,
            shipped_date: None,
            terminal_date: None,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ExportRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
