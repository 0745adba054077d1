//! Serde helper functions for wire-format deserialization.
//!
//! These functions absorb the quirks of the backend's JSON: numbers that
//! arrive as locale-formatted strings, rates that arrive as percentages,
//! ids that arrive as either strings or integers, and empty strings where
//! optional fields were left blank.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::numeric::{normalize_rate, parse_flexible_decimal};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    String(String),
}

/// Deserialize a decimal that may arrive as a number or a locale-formatted
/// string (`"1.234,56"` -> `1234.56`).
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => parse_flexible_decimal(&s).map_err(serde::de::Error::custom),
    }
}

/// Deserialize an optional decimal, treating missing values and empty
/// strings as None.
pub fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => parse_flexible_decimal(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserialize an interest rate into a decimal fraction.
///
/// Accepts numbers and locale-formatted strings; percentages above 1 are
/// divided by 100 (`60` -> `0.60`).
pub fn deserialize_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_decimal(deserializer).map(normalize_rate)
}

/// Deserialize an id that may arrive as a string or an integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n.to_string()),
        IntOrString::String(s) => Ok(s),
    }
}

/// Deserialize a count that may arrive as an integer or a numeric string.
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountRepr {
        Number(u32),
        String(String),
    }

    match CountRepr::deserialize(deserializer)? {
        CountRepr::Number(n) => Ok(n),
        CountRepr::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
