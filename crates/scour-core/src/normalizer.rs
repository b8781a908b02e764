//! Normalizer: maps a [`RawRecord`] onto the fixed [`CanonicalRecord`] shape.
//!
//! Every field is derived independently, so one unusable value never affects
//! the others. Normalization is total: any JSON object produces a record.

use serde_json::Value;

use crate::date::parse_date;
use crate::price::parse_price;
use crate::text::{clean_text, stringify};
use crate::types::{CanonicalRecord, RawRecord};

/// Normalize one raw record.
pub fn normalize_record(raw: &RawRecord) -> CanonicalRecord {
    let content = non_blank(raw, "content")
        .or_else(|| non_blank(raw, "description"))
        .map(clean_text)
        .unwrap_or_default();

    CanonicalRecord {
        id: non_blank(raw, "id").and_then(trimmed),
        title: non_blank(raw, "title").map(clean_text).unwrap_or_default(),
        content,
        price: raw.get("price").and_then(parse_price),
        currency: raw
            .get("currency")
            .and_then(trimmed)
            .map(|code| code.to_uppercase()),
        url: non_blank(raw, "url").and_then(trimmed),
        scraped_at: raw.get("scraped_at").and_then(parse_date),
    }
}

/// Normalize a dataset, one output record per input record, order preserved.
pub fn normalize_dataset(records: &[RawRecord]) -> Vec<CanonicalRecord> {
    let cleaned: Vec<CanonicalRecord> = records.iter().map(normalize_record).collect();
    tracing::debug!(records = cleaned.len(), "normalized dataset");
    cleaned
}

/// `raw[key]` unless it is missing or blank.
///
/// Blank means `null`, `false`, numeric zero, or an empty string, array or
/// object. A scraped `0` id or an empty `content` therefore falls through to
/// the same default as a missing key.
fn non_blank<'a>(raw: &'a RawRecord, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Stringify and trim, mapping an empty result to `None`.
fn trimmed(value: &Value) -> Option<String> {
    let text = stringify(value);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
