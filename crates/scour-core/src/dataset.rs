//! Dataset file I/O: JSON arrays in, JSON arrays and report text out.
//!
//! This is the only part of the crate that can fail. A top-level value that
//! is not an array, or a raw element that is not an object, is rejected as
//! [`Error::InvalidShape`] rather than producing empty output.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{CanonicalRecord, RawRecord};

/// Load a JSON array of raw scraped records.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    let items = load_array(path)?;
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(fields) => Ok(RawRecord::from(fields)),
            other => Err(Error::InvalidShape {
                path: path.to_path_buf(),
                expected: format!("object at index {idx}"),
                found: json_kind(&other).to_string(),
            }),
        })
        .collect()
}

/// Load a JSON array of already-normalized records.
///
/// Records are typed on load, so a field of the wrong JSON type (a numeric
/// `scraped_at` such as `20240315`, a string `price`) fails the whole file
/// with [`Error::Json`] instead of becoming a per-record violation.
pub fn load_canonical_records(path: &Path) -> Result<Vec<CanonicalRecord>> {
    let items = load_array(path)?;
    serde_json::from_value(Value::Array(items)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write normalized records as a JSON array. Non-ASCII text is written
/// verbatim, not escaped.
pub fn write_records(path: &Path, records: &[CanonicalRecord], pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_text(path, &encoded)
}

/// Write the report text as-is.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    write_text(path, report)
}

fn load_array(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded JSON document");

    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::InvalidShape {
            path: path.to_path_buf(),
            expected: "top-level JSON array of records".to_string(),
            found: json_kind(&other).to_string(),
        }),
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
