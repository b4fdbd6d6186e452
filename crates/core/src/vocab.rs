//! Fixed vocabularies: type discriminants and extension keys
//!
//! This module defines the closed set of type discriminants used to tag
//! objects on the wire, plus the well-known extension-key constants.
//!
//! ## Identity classes
//!
//! Every storable kind declares how its identifiers are generated:
//!
//! | Class | Kinds | Identifier |
//! |-------|-------|------------|
//! | Random | domain, relationship, meta objects (and `process`) | fresh UUIDv4 |
//! | ContentDerived | cyber observables | UUIDv5 of the canonical value |
//!
//! The per-kind declaration lives here, not inline in constructors, so that
//! adding a kind means adding one variant and one table entry.

use serde::{Deserialize, Serialize};

/// Identity-generation strategy declared by each object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityClass {
    /// Identifier suffix is a freshly generated random UUIDv4
    Random,
    /// Identifier suffix is a UUIDv5 derived from a canonical value,
    /// so independent producers converge on the same identifier
    ContentDerived,
}

/// The closed vocabulary of type discriminants
///
/// Covers the 41 storable kinds (domain, relationship, meta, and observable
/// objects) plus two wire-only discriminants: `bundle` (the envelope) and
/// `mime-part-type` (only ever embedded inside email messages).
///
/// ## Invariant
///
/// The discriminant strings are part of the wire format and MUST NOT change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    // ----- Domain objects -----
    /// attack-pattern
    #[serde(rename = "attack-pattern")]
    AttackPattern,
    /// campaign
    #[serde(rename = "campaign")]
    Campaign,
    /// course-of-action
    #[serde(rename = "course-of-action")]
    CourseOfAction,
    /// grouping
    #[serde(rename = "grouping")]
    Grouping,
    /// identity
    #[serde(rename = "identity")]
    Identity,
    /// indicator
    #[serde(rename = "indicator")]
    Indicator,
    /// infrastructure
    #[serde(rename = "infrastructure")]
    Infrastructure,
    /// intrusion-set
    #[serde(rename = "intrusion-set")]
    IntrusionSet,
    /// location
    #[serde(rename = "location")]
    Location,
    /// malware
    #[serde(rename = "malware")]
    Malware,
    /// malware-analysis
    #[serde(rename = "malware-analysis")]
    MalwareAnalysis,
    /// note
    #[serde(rename = "note")]
    Note,
    /// observed-data
    #[serde(rename = "observed-data")]
    ObservedData,
    /// opinion
    #[serde(rename = "opinion")]
    Opinion,
    /// report
    #[serde(rename = "report")]
    Report,
    /// threat-actor
    #[serde(rename = "threat-actor")]
    ThreatActor,
    /// tool
    #[serde(rename = "tool")]
    Tool,
    /// vulnerability
    #[serde(rename = "vulnerability")]
    Vulnerability,

    // ----- Relationship objects -----
    /// relationship
    #[serde(rename = "relationship")]
    Relationship,
    /// sighting
    #[serde(rename = "sighting")]
    Sighting,

    // ----- Meta objects -----
    /// extension-definition
    #[serde(rename = "extension-definition")]
    ExtensionDefinition,
    /// language-content
    #[serde(rename = "language-content")]
    LanguageContent,
    /// marking-definition
    #[serde(rename = "marking-definition")]
    MarkingDefinition,

    // ----- Cyber observables -----
    /// artifact
    #[serde(rename = "artifact")]
    Artifact,
    /// autonomous-system
    #[serde(rename = "autonomous-system")]
    AutonomousSystem,
    /// directory
    #[serde(rename = "directory")]
    Directory,
    /// domain-name
    #[serde(rename = "domain-name")]
    DomainName,
    /// email-addr
    #[serde(rename = "email-addr")]
    EmailAddress,
    /// email-message
    #[serde(rename = "email-message")]
    EmailMessage,
    /// file
    #[serde(rename = "file")]
    File,
    /// ipv4-addr
    #[serde(rename = "ipv4-addr")]
    Ipv4Address,
    /// ipv6-addr
    #[serde(rename = "ipv6-addr")]
    Ipv6Address,
    /// mac-addr
    #[serde(rename = "mac-addr")]
    MacAddress,
    /// mutex
    #[serde(rename = "mutex")]
    Mutex,
    /// network-traffic
    #[serde(rename = "network-traffic")]
    NetworkTraffic,
    /// process
    #[serde(rename = "process")]
    Process,
    /// software
    #[serde(rename = "software")]
    Software,
    /// url
    #[serde(rename = "url")]
    Url,
    /// user-account
    #[serde(rename = "user-account")]
    UserAccount,
    /// windows-registry-key
    #[serde(rename = "windows-registry-key")]
    WindowsRegistryKey,
    /// x509-certificate
    #[serde(rename = "x509-certificate")]
    X509Certificate,

    // ----- Wire-only discriminants -----
    /// bundle (the wire envelope; never a store partition)
    #[serde(rename = "bundle")]
    Bundle,
    /// mime-part-type (embedded in email messages; never a top-level object)
    #[serde(rename = "mime-part-type")]
    MimePartType,
}

impl ObjectType {
    /// All type discriminants (for iteration)
    pub const ALL: [ObjectType; 43] = [
        ObjectType::AttackPattern,
        ObjectType::Campaign,
        ObjectType::CourseOfAction,
        ObjectType::Grouping,
        ObjectType::Identity,
        ObjectType::Indicator,
        ObjectType::Infrastructure,
        ObjectType::IntrusionSet,
        ObjectType::Location,
        ObjectType::Malware,
        ObjectType::MalwareAnalysis,
        ObjectType::Note,
        ObjectType::ObservedData,
        ObjectType::Opinion,
        ObjectType::Report,
        ObjectType::ThreatActor,
        ObjectType::Tool,
        ObjectType::Vulnerability,
        ObjectType::Relationship,
        ObjectType::Sighting,
        ObjectType::ExtensionDefinition,
        ObjectType::LanguageContent,
        ObjectType::MarkingDefinition,
        ObjectType::Artifact,
        ObjectType::AutonomousSystem,
        ObjectType::Directory,
        ObjectType::DomainName,
        ObjectType::EmailAddress,
        ObjectType::EmailMessage,
        ObjectType::File,
        ObjectType::Ipv4Address,
        ObjectType::Ipv6Address,
        ObjectType::MacAddress,
        ObjectType::Mutex,
        ObjectType::NetworkTraffic,
        ObjectType::Process,
        ObjectType::Software,
        ObjectType::Url,
        ObjectType::UserAccount,
        ObjectType::WindowsRegistryKey,
        ObjectType::X509Certificate,
        ObjectType::Bundle,
        ObjectType::MimePartType,
    ];

    /// Get all type discriminants as a slice
    pub fn all() -> &'static [ObjectType] {
        &Self::ALL
    }

    /// Wire discriminant string (lowercase, hyphen-separated)
    pub const fn as_str(&self) -> &'static str {
        match self {
            ObjectType::AttackPattern => "attack-pattern",
            ObjectType::Campaign => "campaign",
            ObjectType::CourseOfAction => "course-of-action",
            ObjectType::Grouping => "grouping",
            ObjectType::Identity => "identity",
            ObjectType::Indicator => "indicator",
            ObjectType::Infrastructure => "infrastructure",
            ObjectType::IntrusionSet => "intrusion-set",
            ObjectType::Location => "location",
            ObjectType::Malware => "malware",
            ObjectType::MalwareAnalysis => "malware-analysis",
            ObjectType::Note => "note",
            ObjectType::ObservedData => "observed-data",
            ObjectType::Opinion => "opinion",
            ObjectType::Report => "report",
            ObjectType::ThreatActor => "threat-actor",
            ObjectType::Tool => "tool",
            ObjectType::Vulnerability => "vulnerability",
            ObjectType::Relationship => "relationship",
            ObjectType::Sighting => "sighting",
            ObjectType::ExtensionDefinition => "extension-definition",
            ObjectType::LanguageContent => "language-content",
            ObjectType::MarkingDefinition => "marking-definition",
            ObjectType::Artifact => "artifact",
            ObjectType::AutonomousSystem => "autonomous-system",
            ObjectType::Directory => "directory",
            ObjectType::DomainName => "domain-name",
            ObjectType::EmailAddress => "email-addr",
            ObjectType::EmailMessage => "email-message",
            ObjectType::File => "file",
            ObjectType::Ipv4Address => "ipv4-addr",
            ObjectType::Ipv6Address => "ipv6-addr",
            ObjectType::MacAddress => "mac-addr",
            ObjectType::Mutex => "mutex",
            ObjectType::NetworkTraffic => "network-traffic",
            ObjectType::Process => "process",
            ObjectType::Software => "software",
            ObjectType::Url => "url",
            ObjectType::UserAccount => "user-account",
            ObjectType::WindowsRegistryKey => "windows-registry-key",
            ObjectType::X509Certificate => "x509-certificate",
            ObjectType::Bundle => "bundle",
            ObjectType::MimePartType => "mime-part-type",
        }
    }

    /// Parse from a wire discriminant string
    ///
    /// Case-sensitive; returns `None` for anything outside the closed set.
    pub fn from_str_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }

    /// Check whether this discriminant names a storable object kind
    ///
    /// `bundle` and `mime-part-type` appear on the wire but are never
    /// top-level objects in a collection.
    pub const fn is_storable(&self) -> bool {
        !matches!(self, ObjectType::Bundle | ObjectType::MimePartType)
    }

    /// Check whether this kind is a cyber observable
    pub const fn is_observable(&self) -> bool {
        matches!(
            self,
            ObjectType::Artifact
                | ObjectType::AutonomousSystem
                | ObjectType::Directory
                | ObjectType::DomainName
                | ObjectType::EmailAddress
                | ObjectType::EmailMessage
                | ObjectType::File
                | ObjectType::Ipv4Address
                | ObjectType::Ipv6Address
                | ObjectType::MacAddress
                | ObjectType::Mutex
                | ObjectType::NetworkTraffic
                | ObjectType::Process
                | ObjectType::Software
                | ObjectType::Url
                | ObjectType::UserAccount
                | ObjectType::WindowsRegistryKey
                | ObjectType::X509Certificate
        )
    }

    /// Identity-generation strategy for this kind
    ///
    /// Observables derive their identifiers from content, with one exception:
    /// `process` has no ID-contributing properties and falls back to random
    /// identity. Everything else is random.
    pub const fn identity_class(&self) -> IdentityClass {
        if self.is_observable() && !matches!(self, ObjectType::Process) {
            IdentityClass::ContentDerived
        } else {
            IdentityClass::Random
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Extension keys
// ============================================================================

/// Key for the archive file extension
pub const EXT_ARCHIVE: &str = "archive-ext";
/// Key for the NTFS file extension
pub const EXT_NTFS: &str = "ntfs-ext";
/// Key for the PDF file extension
pub const EXT_PDF: &str = "pdf-ext";
/// Key for the raster image file extension
pub const EXT_RASTER_IMAGE: &str = "raster-image-ext";
/// Key for the Windows PE binary file extension
pub const EXT_WINDOWS_PE_BINARY: &str = "windows-pebinary-ext";
/// Key for the HTTP request network-traffic extension
pub const EXT_HTTP_REQUEST: &str = "http-request-ext";
/// Key for the ICMP network-traffic extension
pub const EXT_ICMP: &str = "icmp-ext";
/// Key for the socket network-traffic extension
pub const EXT_SOCKET: &str = "socket-ext";
/// Key for the TCP network-traffic extension
pub const EXT_TCP: &str = "tcp-ext";
/// Key for the Windows process extension
pub const EXT_WINDOWS_PROCESS: &str = "windows-process-ext";
/// Key for the Windows service extension
pub const EXT_WINDOWS_SERVICE: &str = "windows-service-ext";
/// Key for the UNIX user-account extension
pub const EXT_UNIX_ACCOUNT: &str = "unix-account-ext";

// ============================================================================
// Tests
// ============================================================================
