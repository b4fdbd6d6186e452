//! The closed object catalog and its decode dispatch
//!
//! This crate defines one struct per object kind, partitioned the way the
//! format partitions them:
//! - `sdo`: domain objects (narrative content, random identity, timestamps)
//! - `sro`: relationship objects (random identity, optional timestamps)
//! - `meta`: meta objects (markings, language content, extensions)
//! - `sco`: cyber observables (content-derived identity, no timestamps)
//!
//! All kinds expose the [`StixObject`] capability set and fold into the
//! closed [`Object`] tagged union, which is what the collection store holds
//! and what bundle (de)serialization dispatches over.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod common;
pub mod meta;
pub mod object;
pub mod sco;
pub mod sdo;
pub mod sro;

pub use common::{CommonOptions, DomainProperties, ObservableProperties, SPEC_VERSION};
pub use meta::{ExtensionDefinition, LanguageContent, MarkingDefinition};
pub use object::{decode_object, Object, StixObject};
pub use sco::{
    Artifact, AutonomousSystem, Directory, DomainName, EmailAddress, EmailMessage, File,
    Ipv4Address, Ipv6Address, MacAddress, Mutex, NetworkTraffic, Process, Software, Url,
    UserAccount, WindowsRegistryKey, X509Certificate,
};
pub use sdo::{
    AttackPattern, Campaign, CourseOfAction, Grouping, Identity, Indicator, Infrastructure,
    IntrusionSet, Location, Malware, MalwareAnalysis, Note, ObservedData, Opinion, Report,
    ThreatActor, Tool, Vulnerability,
};
pub use sro::{Relationship, Sighting};

// Re-export the core layer; downstream code should not need stix2-core directly.
pub use stix2_core::*;
