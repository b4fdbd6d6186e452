//! Hash dictionaries and the hash-algorithm vocabulary
//!
//! A hash dictionary maps algorithm names to digest strings. The codec is
//! purely structural (a JSON object); charset and length constraints on the
//! keys are enforced by [`Hashes::validate`] at construction/re-validation
//! time, never inside the codec.
//!
//! The algorithm vocabulary is fixed but not exclusive: unrecognized names
//! are carried through as [`HashAlgorithm::Other`].

use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Vocabulary of hashing algorithms
///
/// The derived ordering places the well-known algorithms before `Other`,
/// which keeps dictionary emission deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    /// MD5 message digest (RFC 1321)
    Md5,
    /// SHA-1 (RFC 3174)
    Sha1,
    /// SHA-256 (RFC 6234)
    Sha256,
    /// SHA-512 (RFC 6234)
    Sha512,
    /// SHA3-256 (FIPS 202)
    Sha3_256,
    /// SHA3-512 (FIPS 202)
    Sha3_512,
    /// ssdeep fuzzy hash
    Ssdeep,
    /// TLSH fuzzy hash
    Tlsh,
    /// Any algorithm name outside the fixed vocabulary
    Other(String),
}

impl HashAlgorithm {
    /// The dictionary-key name for this algorithm
    pub fn as_str(&self) -> &str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Ssdeep => "SSDEEP",
            HashAlgorithm::Tlsh => "TLSH",
            HashAlgorithm::Other(name) => name,
        }
    }

    /// Map a dictionary-key name onto the vocabulary (never fails)
    pub fn from_name(name: &str) -> Self {
        match name {
            "MD5" => HashAlgorithm::Md5,
            "SHA-1" => HashAlgorithm::Sha1,
            "SHA-256" => HashAlgorithm::Sha256,
            "SHA-512" => HashAlgorithm::Sha512,
            "SHA3-256" => HashAlgorithm::Sha3_256,
            "SHA3-512" => HashAlgorithm::Sha3_512,
            "SSDEEP" => HashAlgorithm::Ssdeep,
            "TLSH" => HashAlgorithm::Tlsh,
            other => HashAlgorithm::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.is_empty() {
            return Err(D::Error::custom("hash algorithm name must not be empty"));
        }
        Ok(HashAlgorithm::from_name(&name))
    }
}

/// Dictionary from algorithm name to digest string
///
/// Backed by a `BTreeMap` so emission order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hashes(BTreeMap<HashAlgorithm, String>);

/// Identity-contribution precedence, highest first
const ID_PRECEDENCE: [HashAlgorithm; 4] = [
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha512,
];

impl Hashes {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Hashes(BTreeMap::new())
    }

    /// Insert or replace a digest
    pub fn insert(&mut self, algorithm: HashAlgorithm, digest: impl Into<String>) {
        self.0.insert(algorithm, digest.into());
    }

    /// Look up a digest
    pub fn get(&self, algorithm: &HashAlgorithm) -> Option<&str> {
        self.0.get(algorithm).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&HashAlgorithm, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Enforce the dictionary-key constraints
    ///
    /// Keys must be 3..=250 ASCII characters drawn from `[A-Za-z0-9_-]`.
    /// This is a construction-time validator, not part of the codec.
    pub fn validate(&self) -> Result<()> {
        for key in self.0.keys() {
            let name = key.as_str();
            if name.len() < 3 || name.len() > 250 {
                return Err(Error::InvalidHashKey(name.to_string()));
            }
            if !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(Error::InvalidHashKey(name.to_string()));
            }
        }
        Ok(())
    }

    /// Canonical identity-contribution fragment
    ///
    /// Returns `{"ALG":"digest"}` for the highest-precedence algorithm
    /// present (MD5 > SHA-1 > SHA-256 > SHA-512), or the empty string when
    /// none of those four is present.
    pub fn id_contribution(&self) -> String {
        for algorithm in &ID_PRECEDENCE {
            if let Some(digest) = self.0.get(algorithm) {
                return format!("{{\"{}\":\"{}\"}}", algorithm.as_str(), digest);
            }
        }
        String::new()
    }
}

impl FromIterator<(HashAlgorithm, String)> for Hashes {
    fn from_iter<I: IntoIterator<Item = (HashAlgorithm, String)>>(iter: I) -> Self {
        Hashes(iter.into_iter().collect())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hashes(entries: &[(HashAlgorithm, &str)]) -> Hashes {
        entries
            .iter()
            .map(|(a, d)| (a.clone(), d.to_string()))
            .collect()
    }

    #[test]
    fn test_algorithm_name_roundtrip() {
        let known = [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha512,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_512,
            HashAlgorithm::Ssdeep,
            HashAlgorithm::Tlsh,
        ];
        for algorithm in known {
            let name = algorithm.as_str().to_string();
            assert_eq!(HashAlgorithm::from_name(&name), algorithm);
        }
    }

    #[test]
    fn test_unknown_algorithm_is_carried() {
        let other = HashAlgorithm::from_name("x-custom-hash");
        assert_eq!(other, HashAlgorithm::Other("x-custom-hash".to_string()));
        assert_eq!(other.as_str(), "x-custom-hash");
    }

    #[test]
    fn test_id_contribution_prefers_md5() {
        let h = hashes(&[
            (HashAlgorithm::Sha256, "b"),
            (HashAlgorithm::Md5, "m"),
            (HashAlgorithm::Sha1, "a"),
        ]);
        assert_eq!(h.id_contribution(), "{\"MD5\":\"m\"}");
    }

    #[test]
    fn test_id_contribution_sha1_over_sha256() {
        let h = hashes(&[(HashAlgorithm::Sha1, "a"), (HashAlgorithm::Sha256, "b")]);
        assert_eq!(h.id_contribution(), "{\"SHA-1\":\"a\"}");
    }

    #[test]
    fn test_id_contribution_sha512_last_resort() {
        let h = hashes(&[
            (HashAlgorithm::Sha512, "s"),
            (HashAlgorithm::Tlsh, "t"),
        ]);
        assert_eq!(h.id_contribution(), "{\"SHA-512\":\"s\"}");
    }

    #[test]
    fn test_id_contribution_empty_when_no_candidate() {
        let h = hashes(&[(HashAlgorithm::Ssdeep, "x")]);
        assert_eq!(h.id_contribution(), "");
        assert_eq!(Hashes::new().id_contribution(), "");
    }

    #[test]
    fn test_validate_accepts_vocabulary_keys() {
        let h = hashes(&[
            (HashAlgorithm::Md5, "d"),
            (HashAlgorithm::Sha3_512, "d"),
            (HashAlgorithm::Other("x_custom-1".to_string()), "d"),
        ]);
        assert!(h.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_key() {
        let h = hashes(&[(HashAlgorithm::Other("ab".to_string()), "d")]);
        assert!(matches!(h.validate(), Err(Error::InvalidHashKey(_))));
    }

    #[test]
    fn test_validate_rejects_long_key() {
        let h = hashes(&[(HashAlgorithm::Other("a".repeat(251)), "d")]);
        assert!(h.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_charset() {
        let h = hashes(&[(HashAlgorithm::Other("bad key".to_string()), "d")]);
        assert!(h.validate().is_err());
        let h = hashes(&[(HashAlgorithm::Other("bäd".to_string()), "d")]);
        assert!(h.validate().is_err());
    }

    #[test]
    fn test_serde_is_structural() {
        let h = hashes(&[
            (HashAlgorithm::Md5, "digest-m"),
            (HashAlgorithm::Other("x-weird".to_string()), "digest-x"),
        ]);
        let json = serde_json::to_string(&h).unwrap();
        // no algorithm validation at codec level
        let back: Hashes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
        assert_eq!(back.get(&HashAlgorithm::Md5), Some("digest-m"));
    }

    #[test]
    fn test_serde_emission_is_deterministic() {
        let h = hashes(&[
            (HashAlgorithm::Sha256, "b"),
            (HashAlgorithm::Md5, "m"),
        ]);
        let a = serde_json::to_string(&h).unwrap();
        let b = serde_json::to_string(&h).unwrap();
        assert_eq!(a, b);
        // well-known algorithms sort before their insertion order suggests
        assert!(a.find("MD5").unwrap() < a.find("SHA-256").unwrap());
    }
}
