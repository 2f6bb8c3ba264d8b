//! ISO-8601 timestamp codec for document timestamps.
//!
//! The API formats `created_at` / `updated_at` in the basic ISO-8601 form
//! with a compact UTC offset (`2019-04-03T10:15:30+0000`). Parsing is
//! tolerant: RFC 3339 forms with a colon offset or a `Z` suffix are
//! accepted and normalized to UTC.

use chrono::{DateTime, Utc};

/// Wire format for document timestamps (compact ISO-8601 offset).
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parses a wire timestamp into a UTC datetime.
///
/// Accepts the compact ISO-8601 form emitted by the API and, as a
/// fallback, any RFC 3339 timestamp.
///
/// # Errors
///
/// Returns a [`chrono::ParseError`] when the value matches neither form.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(value, ISO8601_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formats a UTC datetime in the wire format.
#[must_use]
pub fn format(value: DateTime<Utc>) -> String {
    value.format(ISO8601_FORMAT).to_string()
}

/// Serde codec for `Option<DateTime<Utc>>` fields in the wire format.
///
/// Use together with `default` and `skip_serializing_if` so absent
/// timestamps stay off the wire:
///
/// ```rust,ignore
/// #[serde(
///     default,
///     with = "crate::serializer::timestamp::option",
///     skip_serializing_if = "Option::is_none"
/// )]
/// pub created_at: Option<DateTime<Utc>>,
/// ```
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes an optional timestamp in the wire format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&super::format(*dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp, accepting compact and RFC 3339 forms.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error for unparseable timestamp strings.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| super::parse(&value).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_compact_offset() {
        let parsed = parse("2019-04-03T10:15:30+0000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 4, 3, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_colon_offset() {
        let parsed = parse("2019-04-03T10:15:30+00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 4, 3, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_zulu() {
        let parsed = parse("2019-04-03T10:15:30Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 4, 3, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_normalizes_offset_to_utc() {
        let parsed = parse("2019-04-03T12:15:30+0200").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 4, 3, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("not a date").is_err());
        assert!(parse("2019-04-03").is_err());
    }

    #[test]
    fn test_format_emits_compact_offset() {
        let dt = Utc.with_ymd_and_hms(2019, 4, 3, 10, 15, 30).unwrap();
        assert_eq!(format(dt), "2019-04-03T10:15:30+0000");
    }

    #[test]
    fn test_round_trip() {
        let dt = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse(&format(dt)).unwrap(), dt);
    }
}
