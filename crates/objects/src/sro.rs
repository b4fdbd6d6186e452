//! Relationship objects: the edges of the intelligence graph

use crate::common::{require_non_empty, CommonOptions, DomainProperties};
use serde::{Deserialize, Serialize};
use stix2_core::{Error, Identifier, Result, Timestamp};

/// A typed link between two objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the relationship (e.g. `uses`, `indicates`, `mitigates`)
    pub relationship_type: String,
    /// The source object
    pub source_ref: Identifier,
    /// The target object
    pub target_ref: Identifier,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the relationship started being asserted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    /// When the relationship stopped being asserted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<Timestamp>,
}

impl Relationship {
    /// Create a relationship; all three positional properties are required
    pub fn new(
        relationship_type: impl Into<String>,
        source_ref: Identifier,
        target_ref: Identifier,
    ) -> Result<Self> {
        Self::with_options(relationship_type, source_ref, target_ref, CommonOptions::new())
    }

    /// Create a relationship with optional common fields
    pub fn with_options(
        relationship_type: impl Into<String>,
        source_ref: Identifier,
        target_ref: Identifier,
        options: CommonOptions,
    ) -> Result<Self> {
        let relationship_type = relationship_type.into();
        require_non_empty("relationship_type", &relationship_type)?;
        let relationship = Relationship {
            base: DomainProperties::new(Self::TYPE, &options),
            relationship_type,
            source_ref,
            target_ref,
            description: None,
            start_time: None,
            stop_time: None,
        };
        relationship.validate_fields()?;
        Ok(relationship)
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("relationship_type", &self.relationship_type)?;
        if !self.source_ref.is_valid() {
            return Err(Error::InvalidIdentifier(self.source_ref.to_string()));
        }
        if !self.target_ref.is_valid() {
            return Err(Error::InvalidIdentifier(self.target_ref.to_string()));
        }
        Ok(())
    }
}

impl_domain_object!(Relationship, Relationship);

/// A belief that an entity was seen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// The object that was sighted
    pub sighting_of_ref: Identifier,
    /// When the sighting window opened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<Timestamp>,
    /// When the sighting window closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
    /// How many times the entity was sighted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Observed-data records backing the sighting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_data_refs: Option<Vec<Identifier>>,
    /// Who or what saw the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_sighted_refs: Option<Vec<Identifier>>,
    /// Whether the sighting summarizes others
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<bool>,
}

impl Sighting {
    /// Create a sighting; `sighting_of_ref` is required
    pub fn new(sighting_of_ref: Identifier) -> Result<Self> {
        Self::with_options(sighting_of_ref, CommonOptions::new())
    }

    /// Create a sighting with optional common fields
    pub fn with_options(sighting_of_ref: Identifier, options: CommonOptions) -> Result<Self> {
        let sighting = Sighting {
            base: DomainProperties::new(Self::TYPE, &options),
            sighting_of_ref,
            first_seen: None,
            last_seen: None,
            count: None,
            observed_data_refs: None,
            where_sighted_refs: None,
            summary: None,
        };
        sighting.validate_fields()?;
        Ok(sighting)
    }

    fn validate_fields(&self) -> Result<()> {
        if !self.sighting_of_ref.is_valid() {
            return Err(Error::InvalidIdentifier(self.sighting_of_ref.to_string()));
        }
        Ok(())
    }
}

impl_domain_object!(Sighting, Sighting);

// ============================================================================
// Tests
// ============================================================================
