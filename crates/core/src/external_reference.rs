//! External references to material outside the exchange format
//!
//! An external reference points at source material in an external system:
//! a registry entry, a vendor database ID, a report URL. The codec is
//! structural; the required-field rules live in the validating constructor
//! and in [`ExternalReference::validate`].

use crate::error::{Error, Result};
use crate::hashes::Hashes;
use serde::{Deserialize, Serialize};

/// Pointer to information represented outside the format
///
/// `source_name` is required, and at least one of `description`, `url`, or
/// `external_id` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    /// Name of the source the reference is defined within
    pub source_name: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the external resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Hashes of the contents of the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Hashes>,
    /// Identifier of the content in the external system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl ExternalReference {
    /// Validating constructor
    pub fn new(
        source_name: impl Into<String>,
        description: Option<String>,
        url: Option<String>,
        external_id: Option<String>,
        hashes: Option<Hashes>,
    ) -> Result<Self> {
        let reference = ExternalReference {
            source_name: source_name.into(),
            description,
            url,
            hashes,
            external_id,
        };
        reference.validate()?;
        Ok(reference)
    }

    /// Re-check the required-field rules
    pub fn validate(&self) -> Result<()> {
        if self.source_name.is_empty() {
            return Err(Error::PropertyMissing("source_name"));
        }
        let has_description = self.description.as_deref().is_some_and(|s| !s.is_empty());
        let has_url = self.url.as_deref().is_some_and(|s| !s.is_empty());
        let has_external_id = self.external_id.as_deref().is_some_and(|s| !s.is_empty());
        if !has_description && !has_url && !has_external_id {
            return Err(Error::PropertyMissing(
                "one of description, url, external_id",
            ));
        }
        if let Some(hashes) = &self.hashes {
            hashes.validate()?;
        }
        Ok(())
    }

    /// Structural decode from JSON bytes, then validate
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let reference: ExternalReference = serde_json::from_slice(data)?;
        reference.validate()?;
        Ok(reference)
    }
}

// ============================================================================
// Tests
// ============================================================================
