//! JSON wire helpers shared by the record types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Deserializes `null` as the type's default instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a date-time from any of the accepted textual forms.
///
/// Accepted: `2001-04-09`, `2001-04-09T08:30:00`, `2001-04-09T08:30:00.125`
/// and RFC 3339 with an offset (the offset is discarded, the wall-clock time
/// is kept).
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `serde(with = ...)` module for a lenient, always-present date-time.
pub mod date_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATE_TIME_FORMAT))
    }

    /// `null` becomes [`NaiveDateTime::MIN`], the same as a missing key.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(NaiveDateTime::MIN),
            Some(s) => parse_date_time(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid date-time '{}'", s))),
        }
    }
}
