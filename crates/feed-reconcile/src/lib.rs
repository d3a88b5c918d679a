#![deny(unsafe_code)]

//! Multi-entity reconciliation and export for the specimen inventory feed:
//! the cross-table join engine, the export schema projection, cohort
//! partitioning, and the write-once delivery seam.

mod delivery;
mod engine;
mod export;
mod partition;

pub use delivery::{Delivery, deliver_partitions};
pub use engine::reconcile;
pub use export::{VENDOR, format_export};
pub use partition::{DEFAULT_PREFIX, Partition, partition};
