#![deny(unsafe_code)]

//! Batch driver for the specimen inventory feed.

pub mod ingest;
pub mod logging;
pub mod pipeline;
