//! Common property layers shared by the object catalog
//!
//! Two layers exist, matching the two identity classes:
//!
//! - [`DomainProperties`]: domain, relationship, and meta objects. Random
//!   identity, `created`/`modified` timestamps, narrative common fields.
//! - [`ObservableProperties`]: cyber observables. Content-derived identity
//!   (per the kind's declaration), no timestamps.
//!
//! [`CommonOptions`] is the configuration object every domain-side
//! constructor accepts for its optional common fields.

use serde::{Deserialize, Serialize};
use stix2_core::{
    Error, ExternalReference, Identifier, IdentityClass, ObjectType, Result, Timestamp,
};

/// Specification version stamped on newly constructed objects
pub const SPEC_VERSION: &str = "2.1";

/// Check that a required text property is non-empty
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::PropertyMissing(field));
    }
    Ok(())
}

/// Common properties of domain, relationship, and meta objects
///
/// Flattened into each owning struct, so the wire form stays flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProperties {
    /// Object identifier (`<type>--<uuid>`)
    pub id: Identifier,
    /// Specification version the object conforms to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    /// When the object was originally produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// When the object was last modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    /// Producer identity reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_ref: Option<Identifier>,
    /// Whether the object has been revoked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    /// Open-vocabulary labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Producer confidence, 0..=100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Language of the narrative content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Pointers to non-STIX source material
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_references: Option<Vec<ExternalReference>>,
    /// Applied marking definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_marking_refs: Option<Vec<Identifier>>,
}

impl DomainProperties {
    /// Fresh properties for a new object of the given kind
    ///
    /// Assigns a random identifier and stamps `created`/`modified` with the
    /// current instant; `options` may override any optional field.
    pub fn new(object_type: ObjectType, options: &CommonOptions) -> Self {
        let now = Timestamp::now();
        let mut properties = DomainProperties {
            id: Identifier::new_random(object_type),
            spec_version: Some(SPEC_VERSION.to_string()),
            created: Some(now),
            modified: Some(now),
            created_by_ref: None,
            revoked: None,
            labels: None,
            confidence: None,
            lang: None,
            external_references: None,
            object_marking_refs: None,
        };
        options.apply(&mut properties);
        properties
    }

    /// Re-check the common required-field rules
    ///
    /// The identifier must satisfy the `<type>--<uuid>` shape with the
    /// owning object's declared type as prefix.
    pub fn validate(&self, object_type: ObjectType) -> Result<()> {
        if !self.id.is_valid_for(object_type) {
            return Err(Error::InvalidIdentifier(self.id.as_str().to_string()));
        }
        if let Some(references) = &self.external_references {
            for reference in references {
                reference.validate()?;
            }
        }
        Ok(())
    }
}

/// Common properties of cyber observables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservableProperties {
    /// Object identifier (`<type>--<uuid>`)
    pub id: Identifier,
    /// Specification version the object conforms to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    /// Whether the observable value has been defanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defanged: Option<bool>,
}

impl ObservableProperties {
    /// Fresh properties for a new observable of the given kind
    ///
    /// The identifier follows the kind's declared identity class: derived
    /// from `canonical` for content-derived kinds, random otherwise
    /// (`process` is the only random observable).
    pub fn new(object_type: ObjectType, canonical: &str) -> Self {
        let id = match object_type.identity_class() {
            IdentityClass::ContentDerived => Identifier::new_derived(object_type, canonical),
            IdentityClass::Random => Identifier::new_random(object_type),
        };
        ObservableProperties {
            id,
            spec_version: Some(SPEC_VERSION.to_string()),
            defanged: None,
        }
    }

    /// Re-check the common required-field rules
    pub fn validate(&self, object_type: ObjectType) -> Result<()> {
        if !self.id.is_valid_for(object_type) {
            return Err(Error::InvalidIdentifier(self.id.as_str().to_string()));
        }
        Ok(())
    }
}

/// Optional common fields accepted by every domain-side constructor
///
/// A configuration object with enumerated setters; unset fields keep the
/// constructor defaults (fresh timestamps, no narrative fields).
///
/// # Example
///
/// ```
/// use stix2_objects::{CommonOptions, Malware};
/// use stix2_objects::StixObject;
///
/// let options = CommonOptions::new().labels(vec!["trojan".to_string()]);
/// let malware = Malware::with_options(true, options).unwrap();
/// assert!(malware.created().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    created: Option<Timestamp>,
    modified: Option<Timestamp>,
    created_by_ref: Option<Identifier>,
    revoked: Option<bool>,
    labels: Option<Vec<String>>,
    confidence: Option<u8>,
    lang: Option<String>,
    external_references: Option<Vec<ExternalReference>>,
    object_marking_refs: Option<Vec<Identifier>>,
}

impl CommonOptions {
    /// Empty options; constructor defaults apply
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `created` timestamp
    pub fn created(mut self, created: Timestamp) -> Self {
        self.created = Some(created);
        self
    }

    /// Override the `modified` timestamp
    pub fn modified(mut self, modified: Timestamp) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Set the producer identity reference
    pub fn created_by_ref(mut self, reference: Identifier) -> Self {
        self.created_by_ref = Some(reference);
        self
    }

    /// Mark the object revoked
    pub fn revoked(mut self, revoked: bool) -> Self {
        self.revoked = Some(revoked);
        self
    }

    /// Set open-vocabulary labels
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set producer confidence (0..=100)
    pub fn confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Set the content language
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set external references
    pub fn external_references(mut self, references: Vec<ExternalReference>) -> Self {
        self.external_references = Some(references);
        self
    }

    /// Set applied marking definitions
    pub fn object_marking_refs(mut self, references: Vec<Identifier>) -> Self {
        self.object_marking_refs = Some(references);
        self
    }

    fn apply(&self, properties: &mut DomainProperties) {
        if let Some(created) = self.created {
            properties.created = Some(created);
        }
        if let Some(modified) = self.modified {
            properties.modified = Some(modified);
        }
        if let Some(reference) = &self.created_by_ref {
            properties.created_by_ref = Some(reference.clone());
        }
        if let Some(revoked) = self.revoked {
            properties.revoked = Some(revoked);
        }
        if let Some(labels) = &self.labels {
            properties.labels = Some(labels.clone());
        }
        if let Some(confidence) = self.confidence {
            properties.confidence = Some(confidence);
        }
        if let Some(lang) = &self.lang {
            properties.lang = Some(lang.clone());
        }
        if let Some(references) = &self.external_references {
            properties.external_references = Some(references.clone());
        }
        if let Some(references) = &self.object_marking_refs {
            properties.object_marking_refs = Some(references.clone());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_properties_stamp_timestamps() {
        let properties = DomainProperties::new(ObjectType::Malware, &CommonOptions::new());
        assert!(properties.created.is_some());
        assert!(properties.modified.is_some());
        assert_eq!(properties.created, properties.modified);
        assert!(properties.id.is_valid_for(ObjectType::Malware));
        assert_eq!(properties.spec_version.as_deref(), Some("2.1"));
    }

    #[test]
    fn test_options_override_timestamps() {
        let ts = Timestamp::parse("2020-01-02T03:04:05.000Z").unwrap();
        let options = CommonOptions::new().created(ts).modified(ts);
        let properties = DomainProperties::new(ObjectType::Tool, &options);
        assert_eq!(properties.created, Some(ts));
        assert_eq!(properties.modified, Some(ts));
    }

    #[test]
    fn test_options_setters_apply() {
        let marking = Identifier::new_random(ObjectType::MarkingDefinition);
        let options = CommonOptions::new()
            .labels(vec!["apt".to_string()])
            .confidence(80)
            .lang("en")
            .revoked(false)
            .object_marking_refs(vec![marking.clone()]);
        let properties = DomainProperties::new(ObjectType::Report, &options);
        assert_eq!(properties.labels.as_deref(), Some(&["apt".to_string()][..]));
        assert_eq!(properties.confidence, Some(80));
        assert_eq!(properties.lang.as_deref(), Some("en"));
        assert_eq!(properties.revoked, Some(false));
        assert_eq!(properties.object_marking_refs, Some(vec![marking]));
    }

    #[test]
    fn test_domain_validate_checks_identifier_prefix() {
        let mut properties = DomainProperties::new(ObjectType::Malware, &CommonOptions::new());
        assert!(properties.validate(ObjectType::Malware).is_ok());
        assert!(properties.validate(ObjectType::Tool).is_err());

        properties.id = Identifier::from_raw("");
        assert!(matches!(
            properties.validate(ObjectType::Malware),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_observable_properties_follow_identity_class() {
        let a = ObservableProperties::new(ObjectType::DomainName, "[\"example.com\"]");
        let b = ObservableProperties::new(ObjectType::DomainName, "[\"example.com\"]");
        assert_eq!(a.id, b.id, "content-derived identity must converge");

        let p1 = ObservableProperties::new(ObjectType::Process, "");
        let p2 = ObservableProperties::new(ObjectType::Process, "");
        assert_ne!(p1.id, p2.id, "process identity is random");
    }

    #[test]
    fn test_observable_validate_checks_identifier_prefix() {
        let properties = ObservableProperties::new(ObjectType::Url, "[\"https://example.com\"]");
        assert!(properties.validate(ObjectType::Url).is_ok());
        assert!(properties.validate(ObjectType::DomainName).is_err());
    }
}
