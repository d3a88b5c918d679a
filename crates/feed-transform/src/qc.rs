//! Quantitative normalization of quality-control measurements.
//!
//! Volumes convert to microliters, concentrations are already ng/µL, yield is
//! derived, and all three render as fixed-point text with three decimals.
//! Null stays null throughout; the only value invented is the zero floor for
//! negative volumes.

use feed_model::{QcMeasurement, QualityControlRecord};
use tracing::warn;

use crate::numeric::fixed3;

/// Canonical volume unit after normalization.
pub const CANONICAL_VOLUME_UNIT: &str = "uL";
/// Canonical concentration unit.
pub const CANONICAL_CONCENTRATION_UNIT: &str = "ng/ul";

/// Fixed unit-scale table. "Unit" is a count-based physical container
/// convention that scales ×10.
const VOLUME_UNIT_SCALE: &[(&str, f64)] = &[("ml", 1000.0), ("mL", 1000.0), ("uL", 1.0), ("Unit", 10.0)];

fn unit_scale(unit: &str) -> Option<f64> {
    VOLUME_UNIT_SCALE
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)
}

/// Normalize one table of raw QC records. This pass cannot fail: numeric
/// edge cases coerce (clamp or null), never raise.
pub fn normalize_quality_control(records: Vec<QualityControlRecord>) -> Vec<QcMeasurement> {
    records.into_iter().map(normalize_record).collect()
}

fn normalize_record(record: QualityControlRecord) -> QcMeasurement {
    let volume_ul = match (record.vol_avg, record.volume_unit.as_deref()) {
        (Some(value), Some(unit)) => match unit_scale(unit) {
            Some(scale) => Some(value * scale),
            None => {
                // Outside the fixed scale table: assume the value is already
                // in the target unit, as with an absent unit.
                warn!(
                    specimen_id = %record.specimen_id,
                    unit,
                    "unrecognized volume unit, leaving value unscaled"
                );
                Some(value)
            }
        },
        (Some(value), None) => Some(value),
        (None, _) => None,
    };
    // A deliberate floor, not a null: negative volumes clamp to exactly 0.
    let volume_ul = volume_ul.map(|value| if value < 0.0 { 0.0 } else { value });

    let nucleic_yield = match (volume_ul, record.concentration) {
        (Some(volume), Some(concentration)) => Some(volume * concentration / 1000.0),
        _ => None,
    };

    QcMeasurement {
        specimen_id: record.specimen_id,
        volume: volume_ul.map(fixed3),
        volume_unit: volume_ul.map(|_| CANONICAL_VOLUME_UNIT.to_string()),
        concentration: record.concentration.map(fixed3),
        concentration_unit: record
            .concentration
            .map(|_| CANONICAL_CONCENTRATION_UNIT.to_string()),
        nucleic_yield: nucleic_yield.map(fixed3),
        purity: record.purity,
    }
}
