//! Object identifiers: `<type>--<uuid>`
//!
//! Identifiers come in two flavors, declared per object kind:
//!
//! - **Random**: `<type>--<uuid-v4>`, for domain, relationship, and meta
//!   objects. Fresh on every call, never fails.
//! - **Content-derived**: `<type>--<uuid-v5>`, for cyber observables. The v5
//!   UUID is derived from a fixed namespace and the object's canonical value,
//!   so independent producers describing the same observed fact converge on
//!   the same identifier without coordination. This determinism is what makes
//!   cross-producer deduplication work.
//!
//! Validation is total over arbitrary byte input: malformed identifier text
//! is a normal case (lookups receive untrusted strings), never a panic.

use crate::vocab::ObjectType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// UUIDv5 namespace for content-derived (cyber observable) identifiers
///
/// Fixed across producers and time; changing it would break convergence.
pub const OBSERVABLE_NAMESPACE: Uuid = Uuid::from_bytes([
    0x00, 0xab, 0xed, 0xb4, 0xaa, 0x42, 0x46, 0x6c, 0x9c, 0x01, 0xfe, 0xd2, 0x33, 0x15, 0xa9, 0xb7,
]);

/// Separator between the type discriminant and the UUID suffix
const SEPARATOR: &str = "--";

/// Opaque object identifier of the form `<type>--<uuid>`
///
/// Immutable once assigned. The wrapper holds arbitrary text so that lookups
/// can be attempted with untrusted input; use [`Identifier::is_valid`] or
/// [`Identifier::is_valid_for`] to check well-formedness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Create a random identifier for the given type (UUIDv4 suffix)
    ///
    /// Used for domain objects, relationship objects, meta objects, and the
    /// bundle envelope. Never fails.
    pub fn new_random(object_type: ObjectType) -> Self {
        Identifier(format!("{}{}{}", object_type.as_str(), SEPARATOR, Uuid::new_v4()))
    }

    /// Create a content-derived identifier for the given type (UUIDv5 suffix)
    ///
    /// Equal `(object_type, canonical)` pairs always yield the identical
    /// identifier, across processes and time.
    pub fn new_derived(object_type: ObjectType, canonical: &str) -> Self {
        let suffix = Uuid::new_v5(&OBSERVABLE_NAMESPACE, canonical.as_bytes());
        Identifier(format!("{}{}{}", object_type.as_str(), SEPARATOR, suffix))
    }

    /// Wrap arbitrary text without validation
    ///
    /// Lookups must tolerate garbage, so this never fails; the result may
    /// well be invalid.
    pub fn from_raw(text: impl Into<String>) -> Self {
        Identifier(text.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the object type from the discriminant prefix
    ///
    /// Returns `None` when the text has no separator or the prefix is not in
    /// the closed vocabulary. Does not validate the UUID suffix.
    pub fn object_type(&self) -> Option<ObjectType> {
        let (prefix, _) = self.0.split_once(SEPARATOR)?;
        ObjectType::from_str_tag(prefix)
    }

    /// Check the `<type>--<uuid>` shape
    ///
    /// Exactly one separator, non-empty prefix, syntactically valid UUID
    /// suffix. Total over arbitrary input.
    pub fn is_valid(&self) -> bool {
        let parts: Vec<&str> = self.0.split(SEPARATOR).collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return false;
        }
        Uuid::parse_str(parts[1]).is_ok()
    }

    /// Check the shape AND that the prefix equals the expected type
    pub fn is_valid_for(&self, object_type: ObjectType) -> bool {
        let parts: Vec<&str> = self.0.split(SEPARATOR).collect();
        if parts.len() != 2 || parts[0] != object_type.as_str() {
            return false;
        }
        Uuid::parse_str(parts[1]).is_ok()
    }

    /// Check whether the prefix equals the given type (no UUID validation)
    pub fn is_for_type(&self, object_type: ObjectType) -> bool {
        self.0.starts_with(object_type.as_str())
            && self.0[object_type.as_str().len()..].starts_with(SEPARATOR)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Identifier::from_raw(text)
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        Identifier::from_raw(text)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
