use thiserror::Error;

use crate::records::SourceTable;

#[derive(Debug, Error)]
pub enum FeedError {
    /// One or more rows in a source table failed validation. The whole table
    /// aborts; the message names every offending specimen id.
    #[error("incorrect {field} ({table}): {}", .specimen_ids.join(", "))]
    Validation {
        table: SourceTable,
        field: &'static str,
        specimen_ids: Vec<String>,
    },
    /// The destination already holds an artifact with this name. The
    /// destination is write-once, so this aborts the run.
    #[error("destination already contains artifact: {name}")]
    DeliveryConflict { name: String },
    #[error("failed to deliver artifact {name}: {source}")]
    Delivery {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
