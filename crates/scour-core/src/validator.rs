//! Record validation against the fixed rule set.
//!
//! Rules run in a fixed order and each is evaluated independently, so one
//! record can collect several violations (an empty `content` is both
//! missing and too short).

use crate::types::{CanonicalRecord, Field, Violation, ViolationKind};

/// Fields that must be present and non-empty, in reporting order.
pub const REQUIRED_FIELDS: [Field; 3] = [Field::Title, Field::Content, Field::Url];

/// Minimum trimmed length of `content`, in characters.
pub const MIN_CONTENT_LENGTH: usize = 30;

/// Validate one normalized record. The result is in rule order and empty
/// when the record passes everything.
pub fn validate_record(record: &CanonicalRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    for field in REQUIRED_FIELDS {
        if !record.is_populated(field) {
            violations.push(Violation::new(
                field,
                ViolationKind::MissingRequired,
                format!("Required field '{field}' is missing or empty."),
            ));
        }
    }

    if record.content.trim().chars().count() < MIN_CONTENT_LENGTH {
        violations.push(Violation::new(
            Field::Content,
            ViolationKind::TooShort,
            format!("Content must be at least {MIN_CONTENT_LENGTH} characters long."),
        ));
    }

    if let Some(url) = &record.url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            violations.push(Violation::new(
                Field::Url,
                ViolationKind::InvalidFormat,
                "URL should start with http:// or https://.",
            ));
        }
    }

    // Shape check only: `2024-99-99` passes.
    if let Some(scraped_at) = &record.scraped_at {
        if scraped_at.split('-').count() != 3 {
            violations.push(Violation::new(
                Field::ScrapedAt,
                ViolationKind::InvalidFormat,
                "scraped_at should be an ISO-8601 date (YYYY-MM-DD).",
            ));
        }
    }

    violations
}
