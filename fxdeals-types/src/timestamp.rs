//! Deal timestamp parsing.
//!
//! Deal timestamps arrive either as RFC 3339 (`2024-01-15T10:30:00Z`,
//! `2024-01-15T10:30:00+01:00`) or as a local date-time with no offset
//! (`2024-01-15T10:30:00`). Offset-free values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a deal timestamp, normalizing any offset to UTC.
pub fn parse_deal_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|local| local.and_utc())
}

/// Serde adapter for `Option<DateTime<Utc>>` fields that accept both forms.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_deal_timestamp(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid deal timestamp: {raw}")))
        })
        .transpose()
}
