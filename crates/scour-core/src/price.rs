//! Price coercion.
//!
//! Currency markers are removed heuristically before the first number is
//! pulled out of the string. The marker removal drops *every* standalone
//! three-letter word, not just known currency codes, so `"ABC 123"` parses
//! as `123.0` and `"was 10 now 8"` parses as `10.0`.
//!
//! Only ASCII digits convert. Other Unicode decimal digits (`"١٢٣"`) are
//! found by the number pattern but fail `f64` parsing, so they yield `None`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static THREE_LETTER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z]{3}\b").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").unwrap());

/// Coerce a scraped price into a number.
///
/// JSON numbers are widened to `f64` as-is. Strings go through marker
/// stripping and first-number extraction. Anything else, or a string with no
/// usable number, yields `None`.
pub fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_price_str(s),
        _ => None,
    }
}

/// String half of [`parse_price`].
pub fn parse_price_str(text: &str) -> Option<f64> {
    let stripped = THREE_LETTER_WORD.replace_all(text.trim(), "");
    let stripped = stripped.replace('$', "");
    let found = NUMBER.find(stripped.trim())?;
    found.as_str().parse().ok()
}
