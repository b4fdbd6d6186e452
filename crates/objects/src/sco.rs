//! Cyber observables: facts seen on systems and networks
//!
//! Observables carry content-derived identity: the identifier suffix is a
//! UUIDv5 over a canonical rendering of the kind's id-contributing
//! properties, so independent producers converge on the same identifier for
//! the same fact. The canonical rendering is a JSON array of the
//! contributing values, in declaration order.
//!
//! `process` is the exception: it has no id-contributing properties and
//! falls back to random identity.

use crate::common::{require_non_empty, ObservableProperties};
use serde::{Deserialize, Serialize};
use serde_json::json;
use stix2_core::{Binary, Error, Hashes, Identifier, Result, Timestamp};

/// Canonical rendering of id-contributing values
fn canonical(values: &[serde_json::Value]) -> String {
    serde_json::Value::Array(values.to_vec()).to_string()
}

/// Canonical rendering when a hash set takes precedence over a fallback value
///
/// The hash contribution is already a JSON fragment (`{"MD5":"..."}`); it
/// becomes the sole array element. An empty contribution falls back.
fn canonical_with_hashes(hashes: Option<&Hashes>, fallback: &[serde_json::Value]) -> String {
    if let Some(hashes) = hashes {
        let fragment = hashes.id_contribution();
        if !fragment.is_empty() {
            return format!("[{fragment}]");
        }
    }
    canonical(fallback)
}

// ============================================================================
// Single-value observables
// ============================================================================

macro_rules! impl_value_observable {
    ($(#[$doc:meta])* $name:ident, $variant:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Common observable properties
            #[serde(flatten)]
            pub base: ObservableProperties,
            /// The observed value
            pub value: String,
        }

        impl $name {
            /// Create the observable; `value` is required and contributes
            /// the identifier
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                require_non_empty("value", &value)?;
                Ok($name {
                    base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(value)])),
                    value,
                })
            }

            fn validate_fields(&self) -> Result<()> {
                require_non_empty("value", &self.value)
            }
        }

        impl_observable_object!($name, $variant);
    };
}

impl_value_observable!(
    /// A network domain name
    DomainName,
    DomainName
);
impl_value_observable!(
    /// An email sender or recipient address
    EmailAddress,
    EmailAddress
);
impl_value_observable!(
    /// An IPv4 address or CIDR block
    Ipv4Address,
    Ipv4Address
);
impl_value_observable!(
    /// An IPv6 address or CIDR block
    Ipv6Address,
    Ipv6Address
);
impl_value_observable!(
    /// A media access control address
    MacAddress,
    MacAddress
);
impl_value_observable!(
    /// A uniform resource locator
    Url,
    Url
);

// ============================================================================
// Remaining observables
// ============================================================================

/// A byte sequence, carried inline or by reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Media type of the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// The bytes, inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bin: Option<Binary>,
    /// Where the bytes can be fetched; requires `hashes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Digests of the bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Hashes>,
}

impl Artifact {
    /// Create an artifact carrying its bytes inline
    pub fn with_payload(payload_bin: Binary) -> Result<Self> {
        let id_source = canonical(&[json!(payload_bin.encode())]);
        Ok(Artifact {
            base: ObservableProperties::new(Self::TYPE, &id_source),
            mime_type: None,
            payload_bin: Some(payload_bin),
            url: None,
            hashes: None,
        })
    }

    /// Create an artifact referencing external bytes; `hashes` is mandatory
    /// alongside `url`
    pub fn with_url(url: impl Into<String>, hashes: Hashes) -> Result<Self> {
        let url = url.into();
        require_non_empty("url", &url)?;
        if hashes.is_empty() {
            return Err(Error::PropertyMissing("hashes"));
        }
        hashes.validate()?;
        let id_source = canonical_with_hashes(Some(&hashes), &[json!(url)]);
        Ok(Artifact {
            base: ObservableProperties::new(Self::TYPE, &id_source),
            mime_type: None,
            payload_bin: None,
            url: Some(url),
            hashes: Some(hashes),
        })
    }

    fn validate_fields(&self) -> Result<()> {
        if self.payload_bin.is_none() && self.url.is_none() {
            return Err(Error::PropertyMissing("one of payload_bin, url"));
        }
        if self.url.is_some() && self.hashes.as_ref().map_or(true, Hashes::is_empty) {
            return Err(Error::PropertyMissing("hashes"));
        }
        if let Some(hashes) = &self.hashes {
            hashes.validate()?;
        }
        Ok(())
    }
}

impl_observable_object!(Artifact, Artifact);

/// An autonomous system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutonomousSystem {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// The assigned AS number
    pub number: i64,
    /// Name of the AS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Regional internet registry the number was assigned by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<String>,
}

impl AutonomousSystem {
    /// Create an autonomous system; a non-zero `number` is required and
    /// contributes the identifier
    pub fn new(number: i64) -> Result<Self> {
        if number == 0 {
            return Err(Error::PropertyMissing("number"));
        }
        Ok(AutonomousSystem {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(number)])),
            number,
            name: None,
            rir: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        if self.number == 0 {
            return Err(Error::PropertyMissing("number"));
        }
        Ok(())
    }
}

impl_observable_object!(AutonomousSystem, AutonomousSystem);

/// A file-system directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Path to the directory
    pub path: String,
    /// Observed encoding of the path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_enc: Option<String>,
    /// When the directory was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctime: Option<Timestamp>,
    /// When the directory was last written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<Timestamp>,
    /// When the directory was last accessed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atime: Option<Timestamp>,
    /// Files and directories contained within
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_refs: Option<Vec<Identifier>>,
}

impl Directory {
    /// Create a directory; `path` is required and contributes the identifier
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        require_non_empty("path", &path)?;
        Ok(Directory {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(path)])),
            path,
            path_enc: None,
            ctime: None,
            mtime: None,
            atime: None,
            contains_refs: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("path", &self.path)
    }
}

impl_observable_object!(Directory, Directory);

/// An email message or part of one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Whether the message body has multiple MIME parts
    pub is_multipart: bool,
    /// The address the message claims to be from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_ref: Option<Identifier>,
    /// The To recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_refs: Option<Vec<Identifier>>,
    /// Subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body (single-part messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Date header of the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

impl EmailMessage {
    /// Create an email message
    ///
    /// The identifier derives from `from_ref`, `subject`, and `body` in that
    /// order; absent properties are skipped.
    pub fn new(
        is_multipart: bool,
        from_ref: Option<Identifier>,
        subject: Option<String>,
        body: Option<String>,
    ) -> Result<Self> {
        let mut contributing = Vec::new();
        if let Some(from_ref) = &from_ref {
            contributing.push(json!(from_ref.as_str()));
        }
        if let Some(subject) = &subject {
            contributing.push(json!(subject));
        }
        if let Some(body) = &body {
            contributing.push(json!(body));
        }
        Ok(EmailMessage {
            base: ObservableProperties::new(Self::TYPE, &canonical(&contributing)),
            is_multipart,
            from_ref,
            to_refs: None,
            subject,
            body,
            date: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        Ok(())
    }
}

impl_observable_object!(EmailMessage, EmailMessage);

/// A file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Digests of the file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Hashes>,
    /// File name, including extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Media type of the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Directory the file lives in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_directory_ref: Option<Identifier>,
}

impl File {
    /// Create a file; at least one of `name` or `hashes` is required
    ///
    /// Hashes dominate the identifier when an id-contributing algorithm is
    /// present; otherwise the name contributes.
    pub fn new(name: Option<String>, hashes: Option<Hashes>) -> Result<Self> {
        if name.as_deref().map_or(true, str::is_empty) && hashes.is_none() {
            return Err(Error::PropertyMissing("one of name, hashes"));
        }
        if let Some(hashes) = &hashes {
            hashes.validate()?;
        }
        let fallback: Vec<serde_json::Value> = name.iter().map(|n| json!(n)).collect();
        let id_source = canonical_with_hashes(hashes.as_ref(), &fallback);
        Ok(File {
            base: ObservableProperties::new(Self::TYPE, &id_source),
            hashes,
            name,
            size: None,
            mime_type: None,
            parent_directory_ref: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        if self.name.as_deref().map_or(true, str::is_empty) && self.hashes.is_none() {
            return Err(Error::PropertyMissing("one of name, hashes"));
        }
        if let Some(hashes) = &self.hashes {
            hashes.validate()?;
        }
        Ok(())
    }
}

impl_observable_object!(File, File);

/// A mutual-exclusion lock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutex {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Name of the mutex
    pub name: String,
}

impl Mutex {
    /// Create a mutex; `name` is required and contributes the identifier
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Mutex {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(name)])),
            name,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_observable_object!(Mutex, Mutex);

/// Network traffic between two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkTraffic {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Protocols observed, outermost first (e.g. `["ip", "tcp", "http"]`)
    pub protocols: Vec<String>,
    /// Source endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_ref: Option<Identifier>,
    /// Destination endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_ref: Option<Identifier>,
    /// Source port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_port: Option<u16>,
    /// Destination port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_port: Option<u16>,
    /// When the traffic started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    /// When the traffic ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
}

impl NetworkTraffic {
    /// Create network traffic; non-empty `protocols` is required
    ///
    /// The identifier derives from the protocol stack and the ports.
    pub fn new(
        protocols: Vec<String>,
        src_port: Option<u16>,
        dst_port: Option<u16>,
    ) -> Result<Self> {
        if protocols.is_empty() {
            return Err(Error::PropertyMissing("protocols"));
        }
        let mut contributing = vec![json!(protocols)];
        if let Some(port) = src_port {
            contributing.push(json!(port));
        }
        if let Some(port) = dst_port {
            contributing.push(json!(port));
        }
        Ok(NetworkTraffic {
            base: ObservableProperties::new(Self::TYPE, &canonical(&contributing)),
            protocols,
            src_ref: None,
            dst_ref: None,
            src_port,
            dst_port,
            start: None,
            end: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        if self.protocols.is_empty() {
            return Err(Error::PropertyMissing("protocols"));
        }
        Ok(())
    }
}

impl_observable_object!(NetworkTraffic, NetworkTraffic);

/// An instance of a running program
///
/// The only observable with random identity: no property set reliably
/// distinguishes one process from another across producers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Process id on the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,
    /// Full command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,
    /// When the process started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<Timestamp>,
    /// Account the process runs as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_user_ref: Option<Identifier>,
    /// The executable image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<Identifier>,
}

impl Process {
    /// Create a process; the identifier is freshly random
    pub fn new() -> Self {
        Process {
            base: ObservableProperties::new(Self::TYPE, ""),
            pid: None,
            command_line: None,
            created_time: None,
            creator_user_ref: None,
            image_ref: None,
        }
    }

    fn validate_fields(&self) -> Result<()> {
        Ok(())
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new()
    }
}

impl_observable_object!(Process, Process);

/// A software product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Name of the software
    pub name: String,
    /// CPE v2.3 name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,
    /// Vendor of the software
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Version of the software
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Supported languages (ISO 639-2 codes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl Software {
    /// Create a software observable; `name` is required and contributes the
    /// identifier
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Software {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(name)])),
            name,
            cpe: None,
            vendor: None,
            version: None,
            languages: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_observable_object!(Software, Software);

/// An account on a system or service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Account identifier on the owning system
    pub user_id: String,
    /// Login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_login: Option<String>,
    /// Kind of account (e.g. `unix`, `windows-local`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Human display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the account has elevated privileges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_privileged: Option<bool>,
}

impl UserAccount {
    /// Create a user account; `user_id` is required and contributes the
    /// identifier
    pub fn new(user_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        require_non_empty("user_id", &user_id)?;
        Ok(UserAccount {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(user_id)])),
            user_id,
            account_login: None,
            account_type: None,
            display_name: None,
            is_privileged: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("user_id", &self.user_id)
    }
}

impl_observable_object!(UserAccount, UserAccount);

/// A Windows registry key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowsRegistryKey {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Full path to the key, hive included
    pub key: String,
    /// When the key was last modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<Timestamp>,
    /// Account that created the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_user_ref: Option<Identifier>,
    /// Number of subkeys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_subkeys: Option<u64>,
}

impl WindowsRegistryKey {
    /// Create a registry key; `key` is required and contributes the
    /// identifier
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        require_non_empty("key", &key)?;
        Ok(WindowsRegistryKey {
            base: ObservableProperties::new(Self::TYPE, &canonical(&[json!(key)])),
            key,
            modified_time: None,
            creator_user_ref: None,
            number_of_subkeys: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("key", &self.key)
    }
}

impl_observable_object!(WindowsRegistryKey, WindowsRegistryKey);

/// An X.509 certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct X509Certificate {
    /// Common observable properties
    #[serde(flatten)]
    pub base: ObservableProperties,
    /// Digests of the DER-encoded certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Hashes>,
    /// Serial number as issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Issuer distinguished name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Subject distinguished name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Start of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_not_before: Option<Timestamp>,
    /// End of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_not_after: Option<Timestamp>,
}

impl X509Certificate {
    /// Create a certificate; at least one of `serial_number` or `hashes` is
    /// required
    ///
    /// Hashes dominate the identifier; the serial number is the fallback.
    pub fn new(serial_number: Option<String>, hashes: Option<Hashes>) -> Result<Self> {
        if serial_number.as_deref().map_or(true, str::is_empty) && hashes.is_none() {
            return Err(Error::PropertyMissing("one of serial_number, hashes"));
        }
        if let Some(hashes) = &hashes {
            hashes.validate()?;
        }
        let fallback: Vec<serde_json::Value> = serial_number.iter().map(|s| json!(s)).collect();
        let id_source = canonical_with_hashes(hashes.as_ref(), &fallback);
        Ok(X509Certificate {
            base: ObservableProperties::new(Self::TYPE, &id_source),
            hashes,
            serial_number,
            issuer: None,
            subject: None,
            validity_not_before: None,
            validity_not_after: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        if self.serial_number.as_deref().map_or(true, str::is_empty) && self.hashes.is_none() {
            return Err(Error::PropertyMissing("one of serial_number, hashes"));
        }
        Ok(())
    }
}

impl_observable_object!(X509Certificate, X509Certificate);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::StixObject;
    use stix2_core::{HashAlgorithm, ObjectType};

    #[test]
    fn test_value_observables_converge_on_identity() {
        let a = DomainName::new("example.com").unwrap();
        let b = DomainName::new("example.com").unwrap();
        assert_eq!(a.id(), b.id());
        assert!(a.id().is_valid_for(ObjectType::DomainName));

        let c = DomainName::new("example.org").unwrap();
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_value_observables_reject_empty() {
        assert!(DomainName::new("").is_err());
        assert!(EmailAddress::new("").is_err());
        assert!(Ipv4Address::new("").is_err());
        assert!(Ipv6Address::new("").is_err());
        assert!(MacAddress::new("").is_err());
        assert!(Url::new("").is_err());
        assert!(Mutex::new("").is_err());
        assert!(Directory::new("").is_err());
        assert!(Software::new("").is_err());
        assert!(UserAccount::new("").is_err());
        assert!(WindowsRegistryKey::new("").is_err());
    }

    #[test]
    fn test_same_value_different_kind_diverges() {
        let domain = DomainName::new("10.0.0.1").unwrap();
        let addr = Ipv4Address::new("10.0.0.1").unwrap();
        assert_ne!(domain.id().as_str(), addr.id().as_str());
    }

    #[test]
    fn test_observables_carry_no_timestamps() {
        let url = Url::new("https://example.com/malicious").unwrap();
        assert!(url.created().is_none());
        assert!(url.modified().is_none());
        assert!(url.validate().is_ok());
    }

    #[test]
    fn test_file_hash_precedence_drives_identity() {
        let mut md5_first = Hashes::new();
        md5_first.insert(HashAlgorithm::Sha256, "b".repeat(64));
        md5_first.insert(HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e".to_string());

        let mut md5_only = Hashes::new();
        md5_only.insert(HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e".to_string());

        let a = File::new(Some("a.exe".to_string()), Some(md5_first)).unwrap();
        let b = File::new(Some("b.exe".to_string()), Some(md5_only)).unwrap();
        // MD5 outranks SHA-256, and names do not contribute once a hash does
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_file_name_fallback() {
        let a = File::new(Some("report.pdf".to_string()), None).unwrap();
        let b = File::new(Some("report.pdf".to_string()), None).unwrap();
        assert_eq!(a.id(), b.id());
        assert!(File::new(None, None).is_err());
        assert!(File::new(Some(String::new()), None).is_err());
    }

    #[test]
    fn test_artifact_requires_payload_or_url() {
        let artifact = Artifact::with_payload(Binary::new(b"\x4d\x5a\x90".to_vec())).unwrap();
        assert!(artifact.validate().is_ok());

        assert!(Artifact::with_url("https://example.com/a.bin", Hashes::new()).is_err());

        let mut hashes = Hashes::new();
        hashes.insert(HashAlgorithm::Sha256, "c".repeat(64));
        let by_url = Artifact::with_url("https://example.com/a.bin", hashes).unwrap();
        assert!(by_url.validate().is_ok());
    }

    #[test]
    fn test_autonomous_system_identity_from_number() {
        let a = AutonomousSystem::new(64512).unwrap();
        let b = AutonomousSystem::new(64512).unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), AutonomousSystem::new(64513).unwrap().id());
        assert!(AutonomousSystem::new(0).is_err());
    }

    #[test]
    fn test_network_traffic_identity_inputs() {
        let a = NetworkTraffic::new(vec!["ip".into(), "tcp".into()], Some(49152), Some(443)).unwrap();
        let b = NetworkTraffic::new(vec!["ip".into(), "tcp".into()], Some(49152), Some(443)).unwrap();
        assert_eq!(a.id(), b.id());

        let other = NetworkTraffic::new(vec!["ip".into(), "tcp".into()], Some(49152), Some(80)).unwrap();
        assert_ne!(a.id(), other.id());
        assert!(NetworkTraffic::new(vec![], None, None).is_err());
    }

    #[test]
    fn test_email_message_identity_skips_absent_fields() {
        let from = EmailAddress::new("mallory@example.com").unwrap();
        let a = EmailMessage::new(
            false,
            Some(from.id().clone()),
            Some("urgent invoice".to_string()),
            None,
        )
        .unwrap();
        let b = EmailMessage::new(
            false,
            Some(from.id().clone()),
            Some("urgent invoice".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(a.id(), b.id());

        let different = EmailMessage::new(false, None, Some("urgent invoice".to_string()), None).unwrap();
        assert_ne!(a.id(), different.id());
    }

    #[test]
    fn test_process_identity_is_random() {
        let a = Process::new();
        let b = Process::new();
        assert_ne!(a.id(), b.id());
        assert!(a.id().is_valid_for(ObjectType::Process));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_x509_serial_fallback() {
        assert!(X509Certificate::new(None, None).is_err());
        let a = X509Certificate::new(Some("00:11:22".to_string()), None).unwrap();
        let b = X509Certificate::new(Some("00:11:22".to_string()), None).unwrap();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_wire_form_is_flat() {
        let addr = Ipv4Address::new("198.51.100.7").unwrap();
        let value = serde_json::to_value(&addr).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value.get("value").and_then(|v| v.as_str()), Some("198.51.100.7"));
        assert!(value.get("base").is_none());
        assert!(value.get("created").is_none());
    }
}
