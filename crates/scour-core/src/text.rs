//! Text cleanup for free-text fields.
//!
//! Cleaning runs in a fixed order: NFKC → entity decode → tag strip →
//! whitespace collapse. Entities are decoded exactly once, so `&amp;lt;`
//! comes out as `&lt;`, not `<`.
//!
//! Decoding follows the HTML5 character-reference rules: legacy names work
//! without a trailing semicolon (`&amp`, `&copy`) and numeric references in
//! the C1 range map through windows-1252 (`&#128;` is `€`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Render any JSON value as text. Strings pass through untouched, `null`
/// becomes empty, everything else uses its compact JSON form.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Clean a JSON value into display text. Never fails.
pub fn clean_text(value: &Value) -> String {
    clean_str(&stringify(value))
}

/// Clean a string: NFKC-normalize, decode HTML entities, replace tags with a
/// space, then collapse whitespace runs and trim.
///
/// ```
/// use scour_core::text::clean_str;
///
/// assert_eq!(clean_str("<b>Hello</b>&nbsp;World"), "Hello World");
/// ```
pub fn clean_str(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let decoded = htmlize::unescape(folded);
    let untagged = TAG.replace_all(&decoded, " ");
    WHITESPACE.replace_all(&untagged, " ").trim().to_string()
}
