//! stix2 - STIX 2.1 threat-intelligence objects for Rust
//!
//! This crate models the STIX 2.1 object catalog (domain objects,
//! relationships, meta objects, and cyber observables), generates and
//! validates object identifiers, and provides an in-memory, type-partitioned
//! collection store with deduplication and bundle (de)serialization.
//!
//! # Quick Start
//!
//! ```
//! use stix2::{Collection, DomainName, Object};
//!
//! let mut collection = Collection::new();
//! let domain = DomainName::new("example.com").unwrap();
//! collection.add(Object::DomainName(domain));
//!
//! let bundle = collection.to_bundle().unwrap();
//! let json = serde_json::to_string(&bundle).unwrap();
//! # assert!(json.contains("bundle--"));
//! ```
//!
//! # Architecture
//!
//! The workspace is split into three layers:
//! - `stix2-core`: identifiers, scalar codecs, fixed vocabularies, errors
//! - `stix2-objects`: the closed object catalog and decode dispatch
//! - `stix2-collection`: the collection store and bundle ingest/emission
//!
//! Everything is re-exported here; downstream code only needs this crate.

// Re-export the public API from stix2-collection
pub use stix2_collection::*;
