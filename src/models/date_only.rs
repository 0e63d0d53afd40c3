//! Date-only parsing for inbound date fields.
//!
//! Upstream stores sometimes hand over timestamps where a calendar date is
//! meant. Only the leading `YYYY-MM-DD` is significant; anything after it is
//! ignored so comparisons stay date-only.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

/// Parses the leading `YYYY-MM-DD` of a date or timestamp string.
///
/// # Examples
///
/// ```
/// use recap_engine::models::date_only;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert_eq!(date_only::parse("2026-02-01").unwrap(), expected);
/// assert_eq!(date_only::parse("2026-02-01T23:59:59+07:00").unwrap(), expected);
/// ```
pub fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

/// Serde `deserialize_with` adapter around [`parse`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
}

/// Like [`deserialize`], for optional fields. `null` maps to `None`.
///
/// Pair with `#[serde(default)]` so a missing field is accepted too.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw)
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e))),
        None => Ok(None),
    }
}
