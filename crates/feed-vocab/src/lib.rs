#![deny(unsafe_code)]

//! Static vocabulary for the specimen inventory feed.
//!
//! Raw source values (status codes, facility names, analysis types, source
//! codes, container types) translate into canonical export vocabulary through
//! fixed lookup tables. The tables live in [`data`]; [`Vocabulary`] wraps
//! them in an immutable value injected into each transform at construction.

mod data;
mod vocabulary;

pub use vocabulary::{IN_INVENTORY, Vocabulary, WHOLE_BLOOD_SOURCE};
