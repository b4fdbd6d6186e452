//! The type-partitioned, deduplicating object store
//!
//! ## Layout
//!
//! Objects live in one partition per type discriminant, keyed by
//! identifier; a side index remembers first-insertion order. Adding an
//! object whose identifier is already present is a no-op: identity
//! equality governs deduplication, the first stored copy wins.
//!
//! ## Read ordering
//!
//! With [`CollectionOptions::preserve_insertion_order`] set (the default),
//! bulk reads come back in the order objects were added. Unset, bulk reads
//! are shuffled on every call. Shuffling is deliberate: the wire format
//! promises no ordering, and a store that happens to iterate stably lets
//! callers grow silent dependencies on that accident.

use rand::seq::SliceRandom;
use std::collections::HashMap;
use stix2_objects::*;
use tracing::debug;

/// Store configuration
#[derive(Debug, Clone, Copy)]
pub struct CollectionOptions {
    /// Whether bulk reads preserve insertion order (default `true`);
    /// unset, every bulk read is shuffled
    pub preserve_insertion_order: bool,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        CollectionOptions {
            preserve_insertion_order: true,
        }
    }
}

impl CollectionOptions {
    /// Default options: insertion order preserved
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether bulk reads preserve insertion order
    pub fn preserve_insertion_order(mut self, preserve: bool) -> Self {
        self.preserve_insertion_order = preserve;
        self
    }
}

/// An in-memory set of objects, partitioned by type and deduplicated by
/// identifier
///
/// # Example
///
/// ```
/// use stix2_collection::{Collection, DomainName, StixObject};
///
/// let domain = DomainName::new("example.com").unwrap();
/// let id = domain.id().clone();
///
/// let mut collection = Collection::new();
/// collection.add(domain);
/// assert!(collection.get(&id).is_some());
/// assert_eq!(collection.domain_names().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collection {
    partitions: HashMap<ObjectType, HashMap<Identifier, Object>>,
    order: Vec<Identifier>,
    options: CollectionOptions,
}

impl Collection {
    /// Empty collection with default options
    pub fn new() -> Self {
        Self::with_options(CollectionOptions::default())
    }

    /// Empty collection with the given options
    pub fn with_options(options: CollectionOptions) -> Self {
        Collection {
            partitions: HashMap::new(),
            order: Vec::new(),
            options,
        }
    }

    /// Store an object; a duplicate identifier is a no-op
    ///
    /// Deduplication is by identity, not by field equality: the first
    /// stored copy wins.
    pub fn add(&mut self, object: impl Into<Object>) {
        let object = object.into();
        let object_type = object.object_type();
        let id = object.id().clone();
        let partition = self.partitions.entry(object_type).or_default();
        if partition.contains_key(&id) {
            debug!(%id, "duplicate identifier ignored");
            return;
        }
        partition.insert(id.clone(), object);
        self.order.push(id.clone());
        debug!(%id, kind = %object_type, "stored object");
    }

    /// Look up an object by identifier
    ///
    /// The partition is picked from the identifier's type prefix, so a
    /// malformed identifier or one naming an unpopulated type is a miss,
    /// never an error.
    pub fn get(&self, id: &Identifier) -> Option<&Object> {
        let object_type = id.object_type()?;
        self.partitions.get(&object_type)?.get(id)
    }

    /// Look up an object by identifier within one partition
    pub fn get_of_type(&self, object_type: ObjectType, id: &Identifier) -> Option<&Object> {
        self.partitions.get(&object_type)?.get(id)
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection holds no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All stored objects, in read order
    pub fn all_objects(&self) -> Vec<&Object> {
        if self.options.preserve_insertion_order {
            self.order.iter().filter_map(|id| self.get(id)).collect()
        } else {
            let mut objects: Vec<&Object> = self
                .partitions
                .values()
                .flat_map(HashMap::values)
                .collect();
            objects.shuffle(&mut rand::thread_rng());
            objects
        }
    }

    /// All stored objects of one kind, in read order
    pub fn all_of_type(&self, object_type: ObjectType) -> Vec<&Object> {
        let Some(partition) = self.partitions.get(&object_type) else {
            return Vec::new();
        };
        if self.options.preserve_insertion_order {
            self.order.iter().filter_map(|id| partition.get(id)).collect()
        } else {
            let mut objects: Vec<&Object> = partition.values().collect();
            objects.shuffle(&mut rand::thread_rng());
            objects
        }
    }
}

/// Generate the typed accessor pair for each storable kind
macro_rules! typed_accessors {
    ($(($kind:ident, $get:ident, $all:ident, $tag:literal)),+ $(,)?) => {
        impl Collection {
            $(
                #[doc = concat!("Look up a `", $tag, "` object by identifier")]
                ///
                /// Misses on anything stored under another type.
                pub fn $get(&self, id: &Identifier) -> Option<&$kind> {
                    match self.get_of_type(ObjectType::$kind, id) {
                        Some(Object::$kind(inner)) => Some(inner),
                        _ => None,
                    }
                }

                #[doc = concat!("All stored `", $tag, "` objects, in read order")]
                pub fn $all(&self) -> Vec<&$kind> {
                    self.all_of_type(ObjectType::$kind)
                        .into_iter()
                        .filter_map(|object| match object {
                            Object::$kind(inner) => Some(inner),
                            _ => None,
                        })
                        .collect()
                }
            )+
        }
    };
}

typed_accessors!(
    (AttackPattern, attack_pattern, attack_patterns, "attack-pattern"),
    (Campaign, campaign, campaigns, "campaign"),
    (CourseOfAction, course_of_action, courses_of_action, "course-of-action"),
    (Grouping, grouping, groupings, "grouping"),
    (Identity, identity, identities, "identity"),
    (Indicator, indicator, indicators, "indicator"),
    (Infrastructure, infrastructure, all_infrastructure, "infrastructure"),
    (IntrusionSet, intrusion_set, intrusion_sets, "intrusion-set"),
    (Location, location, locations, "location"),
    (Malware, malware, all_malware, "malware"),
    (MalwareAnalysis, malware_analysis, malware_analyses, "malware-analysis"),
    (Note, note, notes, "note"),
    (ObservedData, observed_data, all_observed_data, "observed-data"),
    (Opinion, opinion, opinions, "opinion"),
    (Report, report, reports, "report"),
    (ThreatActor, threat_actor, threat_actors, "threat-actor"),
    (Tool, tool, tools, "tool"),
    (Vulnerability, vulnerability, vulnerabilities, "vulnerability"),
    (Relationship, relationship, relationships, "relationship"),
    (Sighting, sighting, sightings, "sighting"),
    (ExtensionDefinition, extension_definition, extension_definitions, "extension-definition"),
    (LanguageContent, language_content, all_language_content, "language-content"),
    (MarkingDefinition, marking_definition, marking_definitions, "marking-definition"),
    (Artifact, artifact, artifacts, "artifact"),
    (AutonomousSystem, autonomous_system, autonomous_systems, "autonomous-system"),
    (Directory, directory, directories, "directory"),
    (DomainName, domain_name, domain_names, "domain-name"),
    (EmailAddress, email_address, email_addresses, "email-addr"),
    (EmailMessage, email_message, email_messages, "email-message"),
    (File, file, files, "file"),
    (Ipv4Address, ipv4_address, ipv4_addresses, "ipv4-addr"),
    (Ipv6Address, ipv6_address, ipv6_addresses, "ipv6-addr"),
    (MacAddress, mac_address, mac_addresses, "mac-addr"),
    (Mutex, mutex, mutexes, "mutex"),
    (NetworkTraffic, network_traffic, all_network_traffic, "network-traffic"),
    (Process, process, processes, "process"),
    (Software, software, all_software, "software"),
    (Url, url, urls, "url"),
    (UserAccount, user_account, user_accounts, "user-account"),
    (WindowsRegistryKey, windows_registry_key, windows_registry_keys, "windows-registry-key"),
    (X509Certificate, x509_certificate, x509_certificates, "x509-certificate"),
);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stix2_objects::{DomainName, Indicator, Malware, Timestamp, Url};

    fn sample_indicator() -> Indicator {
        Indicator::new(
            "[url:value = 'https://example.com/c2']",
            "stix",
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_then_get() {
        let malware = Malware::new(true).unwrap();
        let id = malware.base.id.clone();
        let mut collection = Collection::new();
        collection.add(malware.clone());

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.malware(&id), Some(&malware));
        assert!(collection.get(&id).is_some());
    }

    #[test]
    fn test_add_is_idempotent_per_identifier() {
        let domain = DomainName::new("example.com").unwrap();
        let mut collection = Collection::new();
        collection.add(domain.clone());
        collection.add(domain.clone());
        // content-derived identity: an equal value is the same identifier
        collection.add(DomainName::new("example.com").unwrap());

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.domain_names().len(), 1);
    }

    #[test]
    fn test_duplicate_identifier_keeps_first_copy() {
        let mut first = Malware::new(true).unwrap();
        first.name = Some("original".to_string());
        let mut imposter = first.clone();
        imposter.name = Some("imposter".to_string());
        let id = first.base.id.clone();

        let mut collection = Collection::new();
        collection.add(first);
        // identity equality governs dedup, field differences do not matter
        collection.add(imposter);

        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.malware(&id).and_then(|m| m.name.as_deref()),
            Some("original")
        );
    }

    #[test]
    fn test_get_misses_are_none_never_panics() {
        let collection = Collection::new();
        assert!(collection.get(&Identifier::from_raw("")).is_none());
        assert!(collection.get(&Identifier::from_raw("malware")).is_none());
        assert!(collection.get(&Identifier::from_raw("--")).is_none());
        assert!(collection
            .get(&Identifier::from_raw("made-up-kind--2f5ac0b8-fd64-4f51-8ea4-4101b0b1a16e"))
            .is_none());
        assert!(collection
            .get(&Identifier::new_random(ObjectType::Tool))
            .is_none());
    }

    #[test]
    fn test_typed_accessor_is_type_safe() {
        let malware = Malware::new(false).unwrap();
        let id = malware.base.id.clone();
        let mut collection = Collection::new();
        collection.add(malware);

        // the identifier exists but under the malware partition
        assert!(collection.indicator(&id).is_none());
        assert!(collection.malware(&id).is_some());
    }

    #[test]
    fn test_all_objects_preserves_insertion_order() {
        let mut collection = Collection::new();
        let mut expected = Vec::new();
        for value in ["a.example", "b.example", "c.example"] {
            let domain = DomainName::new(value).unwrap();
            expected.push(domain.base.id.clone());
            collection.add(domain);
        }
        collection.add(sample_indicator());

        let ids: Vec<&Identifier> = collection.all_objects().iter().map(|o| o.id()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], &expected[0]);
        assert_eq!(ids[1], &expected[1]);
        assert_eq!(ids[2], &expected[2]);

        let domains = collection.domain_names();
        assert_eq!(domains[0].base.id, expected[0]);
        assert_eq!(domains[2].base.id, expected[2]);
    }

    #[test]
    fn test_all_of_type_filters_partitions() {
        let mut collection = Collection::new();
        collection.add(DomainName::new("example.com").unwrap());
        collection.add(Url::new("https://example.com").unwrap());
        collection.add(sample_indicator());

        assert_eq!(collection.all_of_type(ObjectType::DomainName).len(), 1);
        assert_eq!(collection.urls().len(), 1);
        assert_eq!(collection.indicators().len(), 1);
        assert!(collection.all_of_type(ObjectType::Campaign).is_empty());
    }

    #[test]
    fn test_unordered_reads_return_full_contents() {
        let options = CollectionOptions::new().preserve_insertion_order(false);
        let mut collection = Collection::with_options(options);
        for i in 0..16 {
            collection.add(DomainName::new(format!("host{i}.example")).unwrap());
        }
        assert_eq!(collection.all_objects().len(), 16);
        assert_eq!(collection.domain_names().len(), 16);
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.all_objects().is_empty());
        assert!(collection.attack_patterns().is_empty());
    }
}
