//! Date coercion to ISO-8601 calendar dates (`YYYY-MM-DD`).
//!
//! Formats are tried in priority order and the first successful parse wins.
//! Day-first is tried before month-first, so `03/04/2024` is the 3rd of
//! April; month-first only ever matches when the leading number is above 12.
//! Every format needs a four-digit year: `01/02/24` is rejected, not read
//! as the year 24.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde_json::Value;

/// Accepted input formats, highest priority first.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Year-shape guards, index-aligned with [`DATE_FORMATS`]. chrono's `%Y`
/// accepts shorter years.
static FOUR_DIGIT_YEAR: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^[0-9]{4}-").unwrap(),
        Regex::new(r"/[0-9]{4}$").unwrap(),
        Regex::new(r"/[0-9]{4}$").unwrap(),
    ]
});

static ISO_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Coerce a scraped date into `YYYY-MM-DD`.
///
/// Strings that fail every format but already look like an ISO date (for
/// example the calendar-invalid `2024-13-40`) are passed through unchanged.
/// Non-string values yield `None`.
pub fn parse_date(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => parse_date_str(s),
        _ => None,
    }
}

/// String half of [`parse_date`].
pub fn parse_date_str(text: &str) -> Option<String> {
    let text = text.trim();
    let parsed = DATE_FORMATS
        .iter()
        .zip(FOUR_DIGIT_YEAR.iter())
        .filter(|(_, year)| year.is_match(text))
        .find_map(|(fmt, _)| NaiveDate::parse_from_str(text, fmt).ok());

    match parsed {
        Some(date) => Some(iso_date(&date)),
        None if ISO_SHAPE.is_match(text) => Some(text.to_string()),
        None => None,
    }
}

/// The date portion of any calendar value, as `YYYY-MM-DD`.
pub fn iso_date<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
