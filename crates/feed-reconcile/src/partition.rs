//! Cohort partitioning of the formatted export.
//!
//! Two independent binary predicates, P3 study-cohort membership and
//! in-inventory status, split the export into four mutually exclusive,
//! exhaustive partitions, each delivered as its own timestamped artifact.

use feed_model::{ExportRecord, ExportTable};
use feed_vocab::{IN_INVENTORY, Vocabulary};

use crate::export::format_export;

/// Default artifact name prefix.
pub const DEFAULT_PREFIX: &str = "BioTRACS_Merck";

/// One delivery-ready partition.
#[derive(Debug, Clone)]
pub struct Partition {
    pub name: String,
    pub table: ExportTable,
}

/// Which of the four cohorts a row belongs to, determined solely by
/// (cohort membership, canonical current status == "In Inventory").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cohort {
    Inventory,
    NonInventory,
    InventoryP3,
    NonInventoryP3,
}

fn cohort_of(record: &ExportRecord, vocab: &Vocabulary) -> Cohort {
    let p3 = record
        .study_number
        .as_deref()
        .is_some_and(|study| vocab.is_p3_study(study));
    let in_inventory = record.current_status == IN_INVENTORY;
    match (p3, in_inventory) {
        (false, true) => Cohort::Inventory,
        (false, false) => Cohort::NonInventory,
        (true, true) => Cohort::InventoryP3,
        (true, false) => Cohort::NonInventoryP3,
    }
}

fn artifact_name(prefix: &str, inventory: bool, p3: bool, timestamp: &str) -> String {
    let status_tag = if inventory { "INV" } else { "NINV" };
    let cohort_tag = if p3 { "_P3" } else { "" };
    format!("{prefix}_{status_tag}_Sampled{cohort_tag}_{timestamp}.csv")
}

/// Split the reconciled rows into the four delivery partitions, in delivery
/// order (INV, NINV, INV_P3, NINV_P3). `timestamp` is the run timestamp,
/// already rendered as `YYYYMMDD_HHMMSS`.
pub fn partition(
    records: &[ExportRecord],
    vocab: &Vocabulary,
    prefix: &str,
    timestamp: &str,
) -> Vec<Partition> {
    let mut inventory = Vec::new();
    let mut non_inventory = Vec::new();
    let mut inventory_p3 = Vec::new();
    let mut non_inventory_p3 = Vec::new();
    for record in records {
        match cohort_of(record, vocab) {
            Cohort::Inventory => inventory.push(record.clone()),
            Cohort::NonInventory => non_inventory.push(record.clone()),
            Cohort::InventoryP3 => inventory_p3.push(record.clone()),
            Cohort::NonInventoryP3 => non_inventory_p3.push(record.clone()),
        }
    }
    vec![
        Partition {
            name: artifact_name(prefix, true, false, timestamp),
            table: format_export(&inventory),
        },
        Partition {
            name: artifact_name(prefix, false, false, timestamp),
            table: format_export(&non_inventory),
        },
        Partition {
            name: artifact_name(prefix, true, true, timestamp),
            table: format_export(&inventory_p3),
        },
        Partition {
            name: artifact_name(prefix, false, true, timestamp),
            table: format_export(&non_inventory_p3),
        },
    ]
}
