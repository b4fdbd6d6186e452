//! Core types for the stix2 workspace
//!
//! This crate defines the foundational types used throughout the system:
//! - Identifier: dual-mode (random / content-derived) object identity
//! - ObjectType: the closed vocabulary of type discriminants
//! - Timestamp: RFC 3339 timestamps with millisecond output precision
//! - Binary / Hex: encoded byte-sequence scalars
//! - Hashes / HashAlgorithm: the hash dictionary and its vocabulary
//! - ExternalReference / KillChainPhase: structured scalar types
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod error;
pub mod external_reference;
pub mod hashes;
pub mod identifier;
pub mod kill_chain;
pub mod timestamp;
pub mod vocab;

pub use binary::{Binary, Hex};
pub use error::{Error, Result};
pub use external_reference::ExternalReference;
pub use hashes::{HashAlgorithm, Hashes};
pub use identifier::{Identifier, OBSERVABLE_NAMESPACE};
pub use kill_chain::{KillChainPhase, LOCKHEED_MARTIN_CYBER_KILL_CHAIN};
pub use timestamp::Timestamp;
pub use vocab::{IdentityClass, ObjectType};
