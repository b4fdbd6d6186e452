//! Deduplicating in-memory store and the bundle wire envelope
//!
//! [`Collection`] holds decoded objects partitioned by type discriminant
//! and deduplicated by identifier. Reads come back in insertion order by
//! default; an option trades that guarantee away for shuffled reads, so
//! code cannot accidentally grow a dependency on ordering the wire format
//! never promised.
//!
//! [`Bundle`] is the transport envelope: a `bundle`-tagged wrapper holding
//! a flat list of objects. [`Collection::from_json`] accepts either a full
//! envelope or a bare object array.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod store;

pub use bundle::Bundle;
pub use store::{Collection, CollectionOptions};

// Re-export the object catalog; downstream code should only need this crate.
pub use stix2_objects::*;
