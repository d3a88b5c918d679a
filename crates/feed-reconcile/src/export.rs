//! Projection of reconciled rows onto the fixed export schema.
//!
//! Any reconciled field not in the schema is dropped; any schema field the
//! source systems never populate is synthesized as an empty string (that is
//! intentional, not missing data). Dates become `MM/DD/YYYY`, the collection
//! time becomes `HH:MM`, and unparsable values become blank rather than
//! raising. Blank means blank: no sentinel word, no zero.

use feed_model::{EXPORT_COLUMNS, ExportRecord, ExportTable};
use feed_transform::datetime::{format_export_date, format_export_time};

/// Constant vendor identity stamped on every row.
pub const VENDOR: &str = "IBX";

/// Project reconciled rows onto the ordered export schema.
pub fn format_export(records: &[ExportRecord]) -> ExportTable {
    let mut table = ExportTable::default();
    for record in records {
        table.push_row(project(record));
    }
    table
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn date(value: Option<&str>) -> String {
    format_export_date(value).unwrap_or_default()
}

fn project(record: &ExportRecord) -> Vec<String> {
    EXPORT_COLUMNS
        .iter()
        .map(|column| match *column {
            "Analysis Type" => text(record.analysis_type.as_deref()),
            "Collection Date" => date(record.collection_date.as_deref()),
            "Collection Time" => {
                format_export_time(record.collection_time.as_deref()).unwrap_or_default()
            }
            "Created Date" => date(record.created_date.as_deref()),
            "Current Status" => record.current_status.clone(),
            "Destination Facility" => text(record.destination_facility.as_deref()),
            "Nucleic Acid Concentration" => text(record.concentration.as_deref()),
            "Nucleic Acid Volume" => text(record.volume.as_deref()),
            "Nucleic Acid Yield" => text(record.nucleic_yield.as_deref()),
            "Origination Facility" => text(record.origination_facility.as_deref()),
            "Parent Specimen ID" => text(record.parent_specimen_id.as_deref()),
            "Purity" => text(record.purity.as_deref()),
            "Randomization ID" => text(record.randomization_id.as_deref()),
            "Received Date" => date(record.received_date.as_deref()),
            "Screening ID" => text(record.screening_id.as_deref()),
            "Shipped Date" => date(record.shipped_date.as_deref()),
            "Site ID" => text(record.site_id.as_deref()),
            "Specimen Comments" => text(record.comments.as_deref()),
            "Specimen ID" => record.specimen_id.clone(),
            "Specimen Type" => text(record.specimen_type.as_deref()),
            "Study Number" => text(record.study_number.as_deref()),
            "Terminal Date" => date(record.terminal_date.as_deref()),
            "Container Type" => text(record.container_type.as_deref()),
            "Visit" => text(record.visit.as_deref()),
            "Vendor" => VENDOR.to_string(),
            // Everything else (the biopsy/fixation/slide block, Assay,
            // Vendor Specimen ID, Terminal Date_su) is permanently empty.
            _ => String::new(),
        })
        .collect()
}
