//! Core types for scour-core.
//!
//! This module defines the data structures shared by both pipeline stages:
//! the untyped [`RawRecord`] as scraped, the fixed-shape [`CanonicalRecord`]
//! the normalizer produces, and the [`Violation`] values the validator
//! attaches to it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One scraped record exactly as it was loaded: string keys, arbitrary values.
///
/// No invariants hold. Any key may be missing and any value may have the
/// wrong type; the normalizer is responsible for coping with that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a key. Absent keys and explicit `null` both come back as
    /// `None` so callers never have to distinguish them.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A normalized record. Every field is always present; unusable input shows
/// up as `None` or an empty string, never as a missing key.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub scraped_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CanonicalRecord {
    /// Whether `field` carries a usable value: not `None` and not an empty
    /// string. Whitespace-only strings count as populated.
    pub fn is_populated(&self, field: Field) -> bool {
        match field {
            Field::Id => non_empty(&self.id),
            Field::Title => !self.title.is_empty(),
            Field::Content => !self.content.is_empty(),
            Field::Price => self.price.is_some(),
            Field::Currency => non_empty(&self.currency),
            Field::Url => non_empty(&self.url),
            Field::ScrapedAt => non_empty(&self.scraped_at),
        }
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// The canonical field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Title,
    Content,
    Price,
    Currency,
    Url,
    ScrapedAt,
}

impl Field {
    /// Every field, in serialized (and completeness-report) order.
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Title,
        Field::Content,
        Field::Price,
        Field::Currency,
        Field::Url,
        Field::ScrapedAt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Content => "content",
            Field::Price => "price",
            Field::Currency => "currency",
            Field::Url => "url",
            Field::ScrapedAt => "scraped_at",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule a [`Violation`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingRequired,
    TooShort,
    InvalidFormat,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::MissingRequired => write!(f, "missing_required"),
            ViolationKind::TooShort => write!(f, "too_short"),
            ViolationKind::InvalidFormat => write!(f, "invalid_format"),
        }
    }
}

/// A single rule failure on one field of one record. Violations are data:
/// a record that has them is still valid pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: Field,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(field: Field, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}
