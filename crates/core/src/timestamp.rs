//! RFC 3339 timestamps with fixed millisecond output precision
//!
//! Decode accepts any RFC 3339-compatible text, nanosecond tolerant, with
//! either `Z` or a numeric offset. Encode always re-emits exactly three
//! fractional digits, so sub-millisecond precision taken in on decode is
//! discarded on the next encode. This lossy round trip is deliberate: every
//! producer emits the same canonical form.

use crate::error::Result;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An instant with a canonical millisecond-precision RFC 3339 text form
///
/// Comparison and hashing operate on the instant, so two timestamps denoting
/// the same moment in different offsets compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// The current instant, in UTC
    pub fn now() -> Self {
        Timestamp(Utc::now().fixed_offset())
    }

    /// Parse RFC 3339 text (nanosecond tolerant, `Z` or numeric offset)
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Timestamp(DateTime::parse_from_rfc3339(text)?))
    }

    /// Wrap an existing datetime
    pub fn from_datetime(datetime: DateTime<FixedOffset>) -> Self {
        Timestamp(datetime)
    }

    /// The underlying datetime
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Copy with sub-millisecond precision dropped
    ///
    /// This is what a decode of this timestamp's canonical text form yields.
    pub fn truncated_to_millis(&self) -> Self {
        let nanos = self.0.nanosecond();
        let truncated = nanos - nanos % 1_000_000;
        Timestamp(self.0.with_nanosecond(truncated).unwrap_or(self.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Exactly three fractional digits; `Z` for UTC, numeric form otherwise.
        if self.0.offset().local_minus_utc() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Timestamp::parse(&text).map_err(D::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_millisecond_precision() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123Z").unwrap();
        assert_eq!(ts.to_string(), "2020-06-01T12:30:45.123Z");
    }

    #[test]
    fn test_display_pads_missing_fraction() {
        let ts = Timestamp::parse("2020-06-01T12:30:45Z").unwrap();
        assert_eq!(ts.to_string(), "2020-06-01T12:30:45.000Z");
    }

    #[test]
    fn test_display_truncates_nanoseconds() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123456789Z").unwrap();
        assert_eq!(ts.to_string(), "2020-06-01T12:30:45.123Z");
    }

    #[test]
    fn test_display_keeps_numeric_offset() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123+02:00").unwrap();
        assert_eq!(ts.to_string(), "2020-06-01T12:30:45.123+02:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("not a timestamp").is_err());
        assert!(Timestamp::parse("2020-13-45T99:99:99Z").is_err());
    }

    #[test]
    fn test_lossy_roundtrip() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123456789Z").unwrap();
        let reparsed = Timestamp::parse(&ts.to_string()).unwrap();
        assert_eq!(reparsed, ts.truncated_to_millis());
        // and the canonical form is now stable
        assert_eq!(reparsed.to_string(), ts.to_string());
    }

    #[test]
    fn test_equality_is_instant_based() {
        let utc = Timestamp::parse("2020-06-01T12:00:00.000Z").unwrap();
        let offset = Timestamp::parse("2020-06-01T14:00:00.000+02:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2020-06-01T12:00:00.000Z").unwrap();
        let later = Timestamp::parse("2020-06-01T12:00:00.001Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2020-06-01T12:30:45.123Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_serde_rejects_non_string() {
        let parsed: std::result::Result<Timestamp, _> = serde_json::from_str("12345");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_now_is_utc() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().offset().local_minus_utc(), 0);
        assert!(ts.to_string().ends_with('Z'));
    }

    #[test]
    fn test_truncated_to_millis_is_idempotent() {
        let ts = Timestamp::parse("2020-06-01T12:30:45.123456789Z").unwrap();
        let once = ts.truncated_to_millis();
        assert_eq!(once, once.truncated_to_millis());
    }
}
