//! End-to-end batch pipeline: ingest a snapshot, validate and normalize each
//! table, reconcile, partition, and deliver to a write-once destination
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use feed_model::{ExportTable, FeedError, Result as FeedResult};
use feed_reconcile::{Delivery, Partition, deliver_partitions, partition, reconcile};
use feed_transform::{
    ValidationOptions, normalize_quality_control, validate_accessioning, validate_aliquots,
    validate_status_updates,
};
use feed_vocab::Vocabulary;
use tracing::info;

use crate::ingest;

/// Snapshot table file names inside the input directory.
const ACCESSIONING_FILE: &str = "accessioning.json";
const ALIQUOT_FILE: &str = "aliquot.json";
const QUALITY_CONTROL_FILE: &str = "quality_control.json";
const STATUS_UPDATES_FILE: &str = "status_updates.json";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub snapshot_dir: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    /// Run timestamp as `YYYYMMDD_HHMMSS`; defaults to the local wall clock.
    pub timestamp: Option<String>,
    pub options: ValidationOptions,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reconciled_rows: usize,
    pub partitions: Vec<(String, usize)>,
}

/// Run one full batch. Either all four partitions deliver, or the run fails
/// with nothing new committed past the failing artifact.
pub fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    let vocab = Vocabulary::builtin();

    let accessioning = ingest::read_rows(&config.snapshot_dir.join(ACCESSIONING_FILE))?
        .iter()
        .map(ingest::accessioning_record)
        .collect::<Vec<_>>();
    let aliquots = ingest::read_rows(&config.snapshot_dir.join(ALIQUOT_FILE))?
        .iter()
        .map(ingest::aliquot_record)
        .collect::<Vec<_>>();
    let quality_control = ingest::read_rows(&config.snapshot_dir.join(QUALITY_CONTROL_FILE))?
        .iter()
        .map(ingest::quality_control_record)
        .collect::<Vec<_>>();
    let status_updates = ingest::read_rows(&config.snapshot_dir.join(STATUS_UPDATES_FILE))?
        .iter()
        .map(ingest::status_update_record)
        .collect::<Vec<_>>();
    info!(
        accessioning = accessioning.len(),
        aliquots = aliquots.len(),
        quality_control = quality_control.len(),
        status_updates = status_updates.len(),
        "snapshot ingested"
    );

    let accessioning = validate_accessioning(accessioning, &vocab, &config.options)
        .context("accessioning validation failed")?;
    let aliquots = validate_aliquots(aliquots, &vocab, &config.options)
        .context("aliquot validation failed")?;
    let measurements = normalize_quality_control(quality_control);
    let status_updates = validate_status_updates(status_updates, &vocab)
        .context("status-update validation failed")?;

    let rows = reconcile(&accessioning, &aliquots, &measurements, &status_updates);

    let timestamp = config
        .timestamp
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y%m%d_%H%M%S").to_string());
    let partitions = partition(&rows, &vocab, &config.prefix, &timestamp);

    let delivery = FsDelivery::new(&config.output_dir)?;
    deliver_partitions(&delivery, &partitions).context("delivery failed")?;

    Ok(RunSummary {
        reconciled_rows: rows.len(),
        partitions: partitions
            .iter()
            .map(|p: &Partition| (p.name.clone(), p.table.len()))
            .collect(),
    })
}

/// Filesystem-backed delivery destination. Write-once: existence is checked
/// by name before any write.
pub struct FsDelivery {
    root: PathBuf,
}

impl FsDelivery {
    pub fn new(root: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("creating output directory {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl Delivery for FsDelivery {
    fn exists(&self, name: &str) -> FeedResult<bool> {
        Ok(self.root.join(name).exists())
    }

    fn write(&self, name: &str, table: &ExportTable) -> FeedResult<()> {
        let path = self.root.join(name);
        let mut writer = csv::Writer::from_path(&path).map_err(|error| FeedError::Delivery {
            name: name.to_string(),
            source: std::io::Error::other(error),
        })?;
        let as_delivery_error = |error: csv::Error| FeedError::Delivery {
            name: name.to_string(),
            source: std::io::Error::other(error),
        };
        writer
            .write_record(ExportTable::columns())
            .map_err(as_delivery_error)?;
        for row in &table.rows {
            writer.write_record(row).map_err(as_delivery_error)?;
        }
        writer.flush().map_err(|error| FeedError::Delivery {
            name: name.to_string(),
            source: error,
        })?;
        Ok(())
    }
}
