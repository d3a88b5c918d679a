//! The delivery seam.
//!
//! The destination is write-once: delivery checks for an existing artifact
//! name first and treats a collision as fatal for the run, before attempting
//! the write. There is no retry; idempotency comes from refusing to
//! overwrite. Delivery order is the partition order, so the blast radius of
//! a mid-run failure is deterministic: partitions delivered before the
//! failing one stay delivered.

use feed_model::{ExportTable, FeedError, Result};
use tracing::info;

use crate::partition::Partition;

/// The external destination collaborator.
pub trait Delivery {
    fn exists(&self, name: &str) -> Result<bool>;
    fn write(&self, name: &str, table: &ExportTable) -> Result<()>;
}

/// Deliver every partition in order, aborting on the first name conflict or
/// write failure.
pub fn deliver_partitions(delivery: &dyn Delivery, partitions: &[Partition]) -> Result<()> {
    for partition in partitions {
        if delivery.exists(&partition.name)? {
            return Err(FeedError::DeliveryConflict {
                name: partition.name.clone(),
            });
        }
        delivery.write(&partition.name, &partition.table)?;
        info!(
            artifact = %partition.name,
            rows = partition.table.len(),
            "delivered partition"
        );
    }
    Ok(())
}
