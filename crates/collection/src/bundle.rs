//! The bundle envelope and collection (de)serialization
//!
//! A bundle is the transport form: `{"type": "bundle", "id":
//! "bundle--<uuid>", "objects": [...]}`. Bundles have no semantics beyond
//! carriage; decoding one produces a [`Collection`], and a collection
//! serializes back out through [`Collection::to_bundle`].

use crate::store::{Collection, CollectionOptions};
use serde::{Deserialize, Serialize};
use stix2_objects::{decode_object, Error, Identifier, Object, ObjectType, Result, StixObject};
use tracing::debug;

/// The wire envelope: a flat list of objects under a `bundle` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Always `bundle`
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// The envelope's own random identifier
    pub id: Identifier,
    /// The carried objects
    pub objects: Vec<Object>,
}

impl Bundle {
    /// Wrap objects in a fresh envelope
    pub fn new(objects: Vec<Object>) -> Self {
        Bundle {
            object_type: ObjectType::Bundle,
            id: Identifier::new_random(ObjectType::Bundle),
            objects,
        }
    }
}

impl Collection {
    /// Wrap the collection's contents in a bundle
    ///
    /// Every member is re-validated first; the envelope is only built when
    /// all of them pass. Objects appear in the collection's read order.
    pub fn to_bundle(&self) -> Result<Bundle> {
        let objects = self.all_objects();
        for object in &objects {
            object.validate()?;
        }
        debug!(count = objects.len(), "bundling collection");
        Ok(Bundle::new(objects.into_iter().cloned().collect()))
    }

    /// Decode a bundle or a bare object array into a collection
    ///
    /// Decoding is all-or-nothing: the first undecodable or invalid object
    /// fails the whole call.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_options(json, CollectionOptions::default())
    }

    /// Decode a bundle or a bare object array, with explicit store options
    pub fn from_json_with_options(json: &str, options: CollectionOptions) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let items = match &value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(envelope) => {
                let tag = envelope.get("type").and_then(serde_json::Value::as_str);
                if tag != Some(ObjectType::Bundle.as_str()) {
                    return Err(Error::MalformedBundle(format!(
                        "envelope tagged {:?}, expected \"bundle\"",
                        tag.unwrap_or("")
                    )));
                }
                envelope
                    .get("objects")
                    .and_then(serde_json::Value::as_array)
                    .ok_or_else(|| {
                        Error::MalformedBundle("bundle without an objects array".to_string())
                    })?
            }
            _ => {
                return Err(Error::MalformedBundle(
                    "expected a bundle or an object array".to_string(),
                ))
            }
        };

        let mut collection = Collection::with_options(options);
        for item in items {
            collection.add(decode_object(item)?);
        }
        debug!(count = collection.len(), "decoded collection");
        Ok(collection)
    }

    /// Absorb a decoded bundle's objects
    pub fn add_bundle(&mut self, bundle: Bundle) {
        for object in bundle.objects {
            self.add(object);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stix2_objects::{DomainName, Malware, Relationship};

    #[test]
    fn test_bundle_wire_shape() {
        let malware = Malware::new(true).unwrap();
        let bundle = Bundle::new(vec![malware.into()]);
        assert!(bundle.id.is_valid_for(ObjectType::Bundle));

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("bundle"));
        assert_eq!(
            value.get("objects").and_then(|v| v.as_array()).map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn test_collection_roundtrips_through_bundle() {
        let malware = Malware::new(true).unwrap();
        let domain = DomainName::new("c2.example.net").unwrap();
        let relationship = Relationship::new(
            "communicates-with",
            malware.base.id.clone(),
            domain.base.id.clone(),
        )
        .unwrap();

        let mut collection = Collection::new();
        collection.add(malware.clone());
        collection.add(domain);
        collection.add(relationship);

        let json = serde_json::to_string(&collection.to_bundle().unwrap()).unwrap();
        let decoded = Collection::from_json(&json).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded.malware(&malware.base.id), Some(&malware));
    }

    #[test]
    fn test_bundle_preserves_read_order() {
        let mut collection = Collection::new();
        let first = DomainName::new("first.example").unwrap();
        let second = DomainName::new("second.example").unwrap();
        collection.add(first.clone());
        collection.add(second.clone());

        let bundle = collection.to_bundle().unwrap();
        assert_eq!(bundle.objects[0].id(), &first.base.id);
        assert_eq!(bundle.objects[1].id(), &second.base.id);
    }

    #[test]
    fn test_from_json_accepts_bare_array() {
        let domain = DomainName::new("example.org").unwrap();
        let json = serde_json::to_string(&vec![Object::from(domain.clone())]).unwrap();
        let collection = Collection::from_json(&json).unwrap();
        assert_eq!(collection.domain_name(&domain.base.id), Some(&domain));
    }

    #[test]
    fn test_from_json_rejects_malformed_envelopes() {
        assert!(matches!(
            Collection::from_json("{\"type\": \"malware\"}"),
            Err(Error::MalformedBundle(_))
        ));
        assert!(matches!(
            Collection::from_json("{\"type\": \"bundle\"}"),
            Err(Error::MalformedBundle(_))
        ));
        assert!(matches!(
            Collection::from_json("\"just a string\""),
            Err(Error::MalformedBundle(_))
        ));
        assert!(matches!(
            Collection::from_json("not json at all"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_from_json_fails_fast_on_bad_member() {
        let good = serde_json::to_value(Object::from(Malware::new(true).unwrap())).unwrap();
        let bundle = serde_json::json!({
            "type": "bundle",
            "id": "bundle--2f5ac0b8-fd64-4f51-8ea4-4101b0b1a16e",
            "objects": [good, {"type": "made-up-kind"}]
        });
        let err = Collection::from_json(&bundle.to_string()).unwrap_err();
        assert!(matches!(err, Error::UnknownObjectType(_)));
    }

    #[test]
    fn test_to_bundle_rejects_invalid_member() {
        let mut tool = stix2_objects::Tool::new("scanner").unwrap();
        tool.name.clear();
        let mut collection = Collection::new();
        collection.add(tool);
        assert!(collection.to_bundle().is_err());
    }
}
