//! Encoded byte-sequence scalars: Binary (base64) and Hex
//!
//! `Binary` is a raw byte sequence whose JSON text form is standard base64
//! (never the URL-safe variant). Decode is strict: malformed input, including
//! incorrect padding, is a decode error. Encode is total for all byte
//! sequences including the empty one.
//!
//! `Hex` carries a hex-encoded octet string opaquely; it exists so the
//! catalog can type these fields distinctly from free text.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Raw byte sequence with a standard-base64 text form
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary(Vec<u8>);

impl Binary {
    /// Wrap raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Binary(bytes.into())
    }

    /// Decode standard base64 text
    ///
    /// Fails on malformed input, including incorrect padding.
    pub fn decode(text: &str) -> Result<Self> {
        Ok(Binary(STANDARD.decode(text)?))
    }

    /// Encode to standard base64 text (total, including the empty sequence)
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// The raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the wrapper, returning the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of raw bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary(bytes)
    }
}

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Binary::decode(&text).map_err(D::Error::custom)
    }
}

/// Hex-encoded octet string, carried opaquely
///
/// The text must consist of an even number of hexadecimal characters; this
/// wrapper does not enforce that (construction-time validation belongs to
/// per-field validators, which are out of scope at the codec level).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hex(String);

impl Hex {
    /// Wrap hex text
    pub fn new(text: impl Into<String>) -> Self {
        Hex(text.into())
    }

    /// The hex text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let bin = Binary::new(vec![0x00, 0x01, 0xfe, 0xff]);
        let text = bin.encode();
        let back = Binary::decode(&text).unwrap();
        assert_eq!(back, bin);
    }

    #[test]
    fn test_empty_sequence_roundtrip() {
        let bin = Binary::new(Vec::new());
        assert_eq!(bin.encode(), "");
        let back = Binary::decode("").unwrap();
        assert_eq!(back, bin);
        assert!(back.is_empty());
    }

    #[test]
    fn test_decode_known_value() {
        let bin = Binary::decode("aGVsbG8=").unwrap();
        assert_eq!(bin.as_bytes(), b"hello");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(Binary::decode("not base64!!!").is_err());
        // incorrect padding
        assert!(Binary::decode("aGVsbG8").is_err());
        assert!(Binary::decode("aGVsbG8==").is_err());
    }

    #[test]
    fn test_decode_rejects_urlsafe_alphabet() {
        // '-' and '_' belong to the URL-safe variant only
        assert!(Binary::decode("a-b_").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let bin = Binary::new(b"payload".to_vec());
        let json = serde_json::to_string(&bin).unwrap();
        assert_eq!(json, "\"cGF5bG9hZA==\"");
        let back: Binary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bin);
    }

    #[test]
    fn test_serde_rejects_bad_text() {
        let parsed: std::result::Result<Binary, _> = serde_json::from_str("\"%%%\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_display_is_base64() {
        let bin = Binary::new(b"hi".to_vec());
        assert_eq!(bin.to_string(), "aGk=");
    }

    #[test]
    fn test_hex_is_opaque() {
        let hex = Hex::new("deadbeef");
        assert_eq!(hex.as_str(), "deadbeef");
        assert_eq!(hex.to_string(), "deadbeef");
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"deadbeef\"");
    }
}
