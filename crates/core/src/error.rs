//! Error types for the stix2 workspace
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! - Validation failures: a required property is missing or empty at
//!   construction or re-validation time (`PropertyMissing`).
//! - Decode failures: malformed JSON, base64, UUIDs, identifiers, timestamps,
//!   or an unrecognized type discriminant.
//! - Lookup misses are NOT errors. They are represented as `Option::None`
//!   by the collection store and never surface through this enum.
//!
//! No operation in this workspace terminates the process; all failure is
//! returned as data.

use thiserror::Error;

/// Result type alias for stix2 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for object construction, decoding, and re-emission
#[derive(Debug, Error)]
pub enum Error {
    /// A required property is missing or empty
    #[error("required property missing: {0}")]
    PropertyMissing(&'static str),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed base64 data (including incorrect padding)
    #[error("invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Malformed RFC 3339 timestamp
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// Malformed UUID text
    #[error("invalid UUID: {0}")]
    Uuid(#[from] uuid::Error),

    /// Identifier text does not satisfy the `<type>--<uuid>` shape,
    /// or its prefix does not match the owning object's declared type
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Type discriminant not in the closed vocabulary
    #[error("unknown object type: {0:?}")]
    UnknownObjectType(String),

    /// Hash dictionary key violates the charset or length constraints
    #[error("invalid hash dictionary key: {0:?}")]
    InvalidHashKey(String),

    /// Payload is not bundle-shaped (and not a bare object array)
    #[error("malformed bundle: {0}")]
    MalformedBundle(String),
}
