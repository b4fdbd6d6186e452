//! The `StixObject` capability set and the closed `Object` union
//!
//! [`Object`] is the tagged union the collection store holds and bundle
//! (de)serialization dispatches over. The wire discriminant rides in the
//! `type` member; the per-kind payload stays flat beside it.
//!
//! [`decode_object`] is the single entry point from untyped JSON: it checks
//! the discriminant against the closed vocabulary before handing the value
//! to the typed decoder, so unknown and wire-only discriminants fail with a
//! precise error instead of a generic decode failure.

use crate::meta::{ExtensionDefinition, LanguageContent, MarkingDefinition};
use crate::sco::{
    Artifact, AutonomousSystem, Directory, DomainName, EmailAddress, EmailMessage, File,
    Ipv4Address, Ipv6Address, MacAddress, Mutex, NetworkTraffic, Process, Software, Url,
    UserAccount, WindowsRegistryKey, X509Certificate,
};
use crate::sdo::{
    AttackPattern, Campaign, CourseOfAction, Grouping, Identity, Indicator, Infrastructure,
    IntrusionSet, Location, Malware, MalwareAnalysis, Note, ObservedData, Opinion, Report,
    ThreatActor, Tool, Vulnerability,
};
use crate::sro::{Relationship, Sighting};
use serde::{Deserialize, Serialize};
use stix2_core::{Error, Identifier, ObjectType, Result, Timestamp};

/// Capabilities every object kind exposes
pub trait StixObject {
    /// The object's identifier
    fn id(&self) -> &Identifier;

    /// The object's type discriminant
    fn object_type(&self) -> ObjectType;

    /// When the object was created; `None` for observables
    fn created(&self) -> Option<&Timestamp> {
        None
    }

    /// When the object was last modified; `None` for observables and
    /// marking definitions
    fn modified(&self) -> Option<&Timestamp> {
        None
    }

    /// Re-check the kind's required-field rules
    fn validate(&self) -> Result<()>;
}

/// The closed union of the 41 storable object kinds
///
/// Serialized form is the flat wire object with its `type` discriminant;
/// each variant wraps the kind's struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Object {
    /// attack-pattern
    #[serde(rename = "attack-pattern")]
    AttackPattern(AttackPattern),
    /// campaign
    #[serde(rename = "campaign")]
    Campaign(Campaign),
    /// course-of-action
    #[serde(rename = "course-of-action")]
    CourseOfAction(CourseOfAction),
    /// grouping
    #[serde(rename = "grouping")]
    Grouping(Grouping),
    /// identity
    #[serde(rename = "identity")]
    Identity(Identity),
    /// indicator
    #[serde(rename = "indicator")]
    Indicator(Indicator),
    /// infrastructure
    #[serde(rename = "infrastructure")]
    Infrastructure(Infrastructure),
    /// intrusion-set
    #[serde(rename = "intrusion-set")]
    IntrusionSet(IntrusionSet),
    /// location
    #[serde(rename = "location")]
    Location(Location),
    /// malware
    #[serde(rename = "malware")]
    Malware(Malware),
    /// malware-analysis
    #[serde(rename = "malware-analysis")]
    MalwareAnalysis(MalwareAnalysis),
    /// note
    #[serde(rename = "note")]
    Note(Note),
    /// observed-data
    #[serde(rename = "observed-data")]
    ObservedData(ObservedData),
    /// opinion
    #[serde(rename = "opinion")]
    Opinion(Opinion),
    /// report
    #[serde(rename = "report")]
    Report(Report),
    /// threat-actor
    #[serde(rename = "threat-actor")]
    ThreatActor(ThreatActor),
    /// tool
    #[serde(rename = "tool")]
    Tool(Tool),
    /// vulnerability
    #[serde(rename = "vulnerability")]
    Vulnerability(Vulnerability),
    /// relationship
    #[serde(rename = "relationship")]
    Relationship(Relationship),
    /// sighting
    #[serde(rename = "sighting")]
    Sighting(Sighting),
    /// extension-definition
    #[serde(rename = "extension-definition")]
    ExtensionDefinition(ExtensionDefinition),
    /// language-content
    #[serde(rename = "language-content")]
    LanguageContent(LanguageContent),
    /// marking-definition
    #[serde(rename = "marking-definition")]
    MarkingDefinition(MarkingDefinition),
    /// artifact
    #[serde(rename = "artifact")]
    Artifact(Artifact),
    /// autonomous-system
    #[serde(rename = "autonomous-system")]
    AutonomousSystem(AutonomousSystem),
    /// directory
    #[serde(rename = "directory")]
    Directory(Directory),
    /// domain-name
    #[serde(rename = "domain-name")]
    DomainName(DomainName),
    /// email-addr
    #[serde(rename = "email-addr")]
    EmailAddress(EmailAddress),
    /// email-message
    #[serde(rename = "email-message")]
    EmailMessage(EmailMessage),
    /// file
    #[serde(rename = "file")]
    File(File),
    /// ipv4-addr
    #[serde(rename = "ipv4-addr")]
    Ipv4Address(Ipv4Address),
    /// ipv6-addr
    #[serde(rename = "ipv6-addr")]
    Ipv6Address(Ipv6Address),
    /// mac-addr
    #[serde(rename = "mac-addr")]
    MacAddress(MacAddress),
    /// mutex
    #[serde(rename = "mutex")]
    Mutex(Mutex),
    /// network-traffic
    #[serde(rename = "network-traffic")]
    NetworkTraffic(NetworkTraffic),
    /// process
    #[serde(rename = "process")]
    Process(Process),
    /// software
    #[serde(rename = "software")]
    Software(Software),
    /// url
    #[serde(rename = "url")]
    Url(Url),
    /// user-account
    #[serde(rename = "user-account")]
    UserAccount(UserAccount),
    /// windows-registry-key
    #[serde(rename = "windows-registry-key")]
    WindowsRegistryKey(WindowsRegistryKey),
    /// x509-certificate
    #[serde(rename = "x509-certificate")]
    X509Certificate(X509Certificate),
}

/// Run one expression against whichever kind an [`Object`] holds
#[macro_export]
macro_rules! for_each_object {
    ($object:expr, $inner:ident => $body:expr) => {
        match $object {
            $crate::Object::AttackPattern($inner) => $body,
            $crate::Object::Campaign($inner) => $body,
            $crate::Object::CourseOfAction($inner) => $body,
            $crate::Object::Grouping($inner) => $body,
            $crate::Object::Identity($inner) => $body,
            $crate::Object::Indicator($inner) => $body,
            $crate::Object::Infrastructure($inner) => $body,
            $crate::Object::IntrusionSet($inner) => $body,
            $crate::Object::Location($inner) => $body,
            $crate::Object::Malware($inner) => $body,
            $crate::Object::MalwareAnalysis($inner) => $body,
            $crate::Object::Note($inner) => $body,
            $crate::Object::ObservedData($inner) => $body,
            $crate::Object::Opinion($inner) => $body,
            $crate::Object::Report($inner) => $body,
            $crate::Object::ThreatActor($inner) => $body,
            $crate::Object::Tool($inner) => $body,
            $crate::Object::Vulnerability($inner) => $body,
            $crate::Object::Relationship($inner) => $body,
            $crate::Object::Sighting($inner) => $body,
            $crate::Object::ExtensionDefinition($inner) => $body,
            $crate::Object::LanguageContent($inner) => $body,
            $crate::Object::MarkingDefinition($inner) => $body,
            $crate::Object::Artifact($inner) => $body,
            $crate::Object::AutonomousSystem($inner) => $body,
            $crate::Object::Directory($inner) => $body,
            $crate::Object::DomainName($inner) => $body,
            $crate::Object::EmailAddress($inner) => $body,
            $crate::Object::EmailMessage($inner) => $body,
            $crate::Object::File($inner) => $body,
            $crate::Object::Ipv4Address($inner) => $body,
            $crate::Object::Ipv6Address($inner) => $body,
            $crate::Object::MacAddress($inner) => $body,
            $crate::Object::Mutex($inner) => $body,
            $crate::Object::NetworkTraffic($inner) => $body,
            $crate::Object::Process($inner) => $body,
            $crate::Object::Software($inner) => $body,
            $crate::Object::Url($inner) => $body,
            $crate::Object::UserAccount($inner) => $body,
            $crate::Object::WindowsRegistryKey($inner) => $body,
            $crate::Object::X509Certificate($inner) => $body,
        }
    };
}

impl StixObject for Object {
    fn id(&self) -> &Identifier {
        for_each_object!(self, inner => inner.id())
    }

    fn object_type(&self) -> ObjectType {
        for_each_object!(self, inner => inner.object_type())
    }

    fn created(&self) -> Option<&Timestamp> {
        for_each_object!(self, inner => inner.created())
    }

    fn modified(&self) -> Option<&Timestamp> {
        for_each_object!(self, inner => inner.modified())
    }

    fn validate(&self) -> Result<()> {
        for_each_object!(self, inner => inner.validate())
    }
}

macro_rules! impl_object_from {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl From<$kind> for Object {
                fn from(inner: $kind) -> Self {
                    Object::$kind(inner)
                }
            }
        )+
    };
}

impl_object_from!(
    AttackPattern,
    Campaign,
    CourseOfAction,
    Grouping,
    Identity,
    Indicator,
    Infrastructure,
    IntrusionSet,
    Location,
    Malware,
    MalwareAnalysis,
    Note,
    ObservedData,
    Opinion,
    Report,
    ThreatActor,
    Tool,
    Vulnerability,
    Relationship,
    Sighting,
    ExtensionDefinition,
    LanguageContent,
    MarkingDefinition,
    Artifact,
    AutonomousSystem,
    Directory,
    DomainName,
    EmailAddress,
    EmailMessage,
    File,
    Ipv4Address,
    Ipv6Address,
    MacAddress,
    Mutex,
    NetworkTraffic,
    Process,
    Software,
    Url,
    UserAccount,
    WindowsRegistryKey,
    X509Certificate,
);

/// Decode one wire object into the typed union
///
/// The `type` discriminant is checked against the closed vocabulary first:
/// a missing or non-string discriminant is a malformed object, a
/// discriminant outside the vocabulary (or a wire-only one like `bundle`)
/// is an unknown type. The decoded object is then validated.
pub fn decode_object(value: &serde_json::Value) -> Result<Object> {
    let tag = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::MalformedBundle("object without a type discriminant".to_string()))?;
    let object_type = ObjectType::from_str_tag(tag)
        .ok_or_else(|| Error::UnknownObjectType(tag.to_string()))?;
    if !object_type.is_storable() {
        return Err(Error::UnknownObjectType(tag.to_string()));
    }
    let object: Object = serde_json::from_value(value.clone())?;
    object.validate()?;
    Ok(object)
}

// ============================================================================
// Tests
// ============================================================================
