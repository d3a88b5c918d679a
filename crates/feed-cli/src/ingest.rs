//! Snapshot ingestion.
//!
//! Each source table arrives as a JSON array of row objects. Rows carry an
//! embedded variable `meta` sub-object that is flattened into top-level
//! columns before any validation runs; top-level columns win on collision.

use std::fs;
use std::path::Path;

use anyhow::Context;
use feed_model::{
    AccessioningRecord, AliquotRecord, QualityControlRecord, StatusUpdateRecord,
};
use serde_json::{Map, Value};

pub type RawRow = Map<String, Value>;

/// Read one table file as raw rows with `meta` already flattened.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<RawRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot table {}", path.display()))?;
    let rows: Vec<RawRow> = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot table {}", path.display()))?;
    Ok(rows.into_iter().map(flatten_meta).collect())
}

fn flatten_meta(mut row: RawRow) -> RawRow {
    if let Some(Value::Object(meta)) = row.remove("meta") {
        for (key, value) in meta {
            row.entry(key).or_insert(value);
        }
    }
    row
}

fn text(row: &RawRow, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => {
            // Integer-valued numbers render without a fractional part so
            // zero-padding sees "42", not "42.0".
            if let Some(int) = value.as_i64() {
                Some(int.to_string())
            } else {
                Some(value.to_string())
            }
        }
        Value::Bool(value) => Some(value.to_string()),
        other => Some(other.to_string()),
    }
}

fn number(row: &RawRow, column: &str) -> Option<f64> {
    match row.get(column)? {
        Value::Number(value) => value.as_f64(),
        Value::String(value) => value.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn accessioning_record(row: &RawRow) -> AccessioningRecord {
    AccessioningRecord {
        specimen_id: text(row, "inventory_code").unwrap_or_default(),
        analysis_type: text(row, "analysis_type"),
        source: text(row, "source"),
        container_type: text(row, "container_type"),
        status: text(row, "status"),
        specimen_type: None,
        origination_facility: text(row, "origination_facility"),
        destination_facility: text(row, "destination_facility"),
        site_name: text(row, "site_name"),
        site: text(row, "site"),
        randomization_id: text(row, "randomization_id"),
        screening_number: text(row, "screening_number"),
        comments: text(row, "comments"),
        study_number: text(row, "study_name"),
        visit: text(row, "family_id"),
        vendor_specimen_id: text(row, "ruid"),
        created_on: text(row, "created_on"),
        date_received: text(row, "date_received"),
        draw_date: text(row, "draw_date"),
        draw_time: text(row, "draw_time"),
    }
}

pub fn aliquot_record(row: &RawRow) -> AliquotRecord {
    AliquotRecord {
        specimen_id: text(row, "inventory_code").unwrap_or_default(),
        ultimate_parent: text(row, "ultimate_parent"),
        status: text(row, "status"),
        source: text(row, "source"),
        container_type: text(row, "container_type"),
        specimen_type: None,
        vendor_specimen_id: text(row, "ruid"),
        created_on: text(row, "aliquot_created_on"),
    }
}

pub fn quality_control_record(row: &RawRow) -> QualityControlRecord {
    QualityControlRecord {
        specimen_id: text(row, "inventory_code").unwrap_or_default(),
        concentration: number(row, "concentration"),
        vol_avg: number(row, "vol_avg"),
        volume_unit: text(row, "volume_unit"),
        purity: text(row, "260_280"),
    }
}

pub fn status_update_record(row: &RawRow) -> StatusUpdateRecord {
    StatusUpdateRecord {
        specimen_id: text(row, "inventory_code").unwrap_or_default(),
        status: text(row, "status"),
        site_name: text(row, "site_name"),
        stored_date: text(row, "stored_date"),
        shipped_date: text(row, "shipped_date"),
        disposed_date: text(row, "disposed_date"),
        date_updated: text(row, "date_updated"),
    }
}
