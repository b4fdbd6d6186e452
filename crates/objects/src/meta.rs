//! Meta objects: markings, translations, and extension declarations
//!
//! These ride the domain-object property layer (random identity) but are
//! not themselves intelligence content. `marking-definition` is the one
//! kind whose `modified` stays unset: marking definitions are immutable
//! once issued.

use crate::common::{require_non_empty, CommonOptions, DomainProperties};
use serde::{Deserialize, Serialize};
use stix2_core::{Error, Identifier, Result};

/// A declaration of a reusable extension to the object catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionDefinition {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the extension
    pub name: String,
    /// URL of the normative schema
    pub schema: String,
    /// Version of the extension
    pub version: String,
    /// How the extension extends objects (e.g. `property-extension`)
    pub extension_types: Vec<String>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExtensionDefinition {
    /// Create an extension definition; all four positional properties are required
    pub fn new(
        name: impl Into<String>,
        schema: impl Into<String>,
        version: impl Into<String>,
        extension_types: Vec<String>,
    ) -> Result<Self> {
        let definition = ExtensionDefinition {
            base: DomainProperties::new(Self::TYPE, &CommonOptions::new()),
            name: name.into(),
            schema: schema.into(),
            version: version.into(),
            extension_types,
            description: None,
        };
        definition.validate_fields()?;
        Ok(definition)
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("schema", &self.schema)?;
        require_non_empty("version", &self.version)?;
        if self.extension_types.is_empty() {
            return Err(Error::PropertyMissing("extension_types"));
        }
        Ok(())
    }
}

impl_domain_object!(ExtensionDefinition, ExtensionDefinition);

/// Translations of another object's text properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageContent {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// The object being translated
    pub object_ref: Identifier,
    /// Translations keyed by RFC 5646 language tag, then by property name
    pub contents: serde_json::Map<String, serde_json::Value>,
    /// Version of the referenced object the translations apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_modified: Option<String>,
}

impl LanguageContent {
    /// Create language content; `object_ref` and non-empty `contents` are required
    pub fn new(
        object_ref: Identifier,
        contents: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self> {
        let content = LanguageContent {
            base: DomainProperties::new(Self::TYPE, &CommonOptions::new()),
            object_ref,
            contents,
            object_modified: None,
        };
        content.validate_fields()?;
        Ok(content)
    }

    fn validate_fields(&self) -> Result<()> {
        if !self.object_ref.is_valid() {
            return Err(Error::InvalidIdentifier(self.object_ref.to_string()));
        }
        if self.contents.is_empty() {
            return Err(Error::PropertyMissing("contents"));
        }
        Ok(())
    }
}

impl_domain_object!(LanguageContent, LanguageContent);

/// A data-handling marking (e.g. a TLP level)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkingDefinition {
    /// Common domain-object properties; `modified` stays unset
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the marking
    pub name: String,
    /// Marking taxonomy this definition belongs to (e.g. `tlp`, `statement`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_type: Option<String>,
    /// The marking payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,
}

impl MarkingDefinition {
    /// Create a marking definition; `name` is required
    ///
    /// Marking definitions are immutable, so `modified` is never stamped.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        let mut base = DomainProperties::new(Self::TYPE, &CommonOptions::new());
        base.modified = None;
        Ok(MarkingDefinition {
            base,
            name,
            definition_type: None,
            definition: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(MarkingDefinition, MarkingDefinition);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::StixObject;
    use stix2_core::ObjectType;

    #[test]
    fn test_extension_definition_required_fields() {
        assert!(ExtensionDefinition::new("", "https://example.com/s.json", "1.0", vec!["property-extension".into()]).is_err());
        assert!(ExtensionDefinition::new("ext", "", "1.0", vec!["property-extension".into()]).is_err());
        assert!(ExtensionDefinition::new("ext", "https://example.com/s.json", "", vec!["property-extension".into()]).is_err());
        assert!(ExtensionDefinition::new("ext", "https://example.com/s.json", "1.0", vec![]).is_err());

        let definition = ExtensionDefinition::new(
            "ext",
            "https://example.com/s.json",
            "1.2.1",
            vec!["property-extension".into()],
        )
        .unwrap();
        assert_eq!(definition.object_type(), ObjectType::ExtensionDefinition);
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_language_content_requires_contents() {
        let target = Identifier::new_random(ObjectType::Campaign);
        assert!(LanguageContent::new(target.clone(), serde_json::Map::new()).is_err());

        let mut contents = serde_json::Map::new();
        contents.insert(
            "de".to_string(),
            serde_json::json!({"name": "Bankraub-Kampagne"}),
        );
        let content = LanguageContent::new(target, contents).unwrap();
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_language_content_rejects_malformed_ref() {
        let mut contents = serde_json::Map::new();
        contents.insert("fr".to_string(), serde_json::json!({"name": "campagne"}));
        assert!(LanguageContent::new(Identifier::from_raw("campaign"), contents).is_err());
    }

    #[test]
    fn test_marking_definition_has_no_modified() {
        let marking = MarkingDefinition::new("TLP:GREEN").unwrap();
        assert!(marking.created().is_some());
        assert!(marking.modified().is_none());
        assert!(marking.validate().is_ok());

        let value = serde_json::to_value(&marking).unwrap();
        assert!(value.get("modified").is_none());
    }

    #[test]
    fn test_marking_definition_requires_name() {
        assert!(MarkingDefinition::new("").is_err());
    }
}
