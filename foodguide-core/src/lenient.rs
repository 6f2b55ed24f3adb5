//! Field decoders that never fail.
//!
//! `foods.json` is edited by hand, so a value of the wrong type decodes to
//! the field's default instead of rejecting the whole catalog. Numbers are
//! accepted where text is expected and keep the digits they were written
//! with; numeric strings are accepted where a number is expected.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::catalog::{DetailedInfo, FoodId, FoodItem};

fn number_text(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(|f| format!("{f}")).unwrap_or_default()
    } else {
        n.to_string()
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(number_text(&n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(entries) => Some(entries.into_iter().filter_map(value_text).collect()),
        _ => None,
    }
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Array entries that can be shown as text; anything else is an empty list.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_list(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn optional_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_list(Value::deserialize(deserializer)?))
}

pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}

pub fn id<'de, D>(deserializer: D) -> Result<FoodId, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<FoodId>().ok(),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}

/// Only an object yields a detailed-info block.
pub fn detailed_info<'de, D>(deserializer: D) -> Result<Option<DetailedInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(DetailedInfo::deserialize(value).ok()),
        _ => Ok(None),
    }
}

/// Decode one region's entries, skipping any that are not objects.
pub fn food_items(region: &str, entries: Vec<Value>) -> Vec<FoodItem> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(_) => FoodItem::deserialize(entry).ok(),
            other => {
                log::debug!("skipping non-object entry in region {region}: {other}");
                None
            }
        })
        .collect()
}
