//! Plain-text quality report.
//!
//! The layout is fixed: banner, summary counts, completeness per field, the
//! most common failures, then one block per record.

use crate::summary::Summary;
use crate::types::{CanonicalRecord, Violation};

/// How many `(field, kind)` pairs the failures section lists.
pub const TOP_FAILURES: usize = 5;

/// Render the report. Identical inputs always produce identical text.
///
/// `records` and `per_record_violations` are walked in lockstep; extra
/// entries on either side are ignored.
pub fn generate_report(
    records: &[CanonicalRecord],
    per_record_violations: &[Vec<Violation>],
    summary: &Summary,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    section(&mut lines, "DATA QUALITY REPORT", '=');
    lines.push(String::new());

    section(&mut lines, "SUMMARY", '-');
    lines.push(format!("Total records: {}", summary.total_records));
    lines.push(format!("Valid records: {}", summary.records_without_violations));
    lines.push(format!("Invalid records: {}", summary.records_with_violations));
    lines.push(format!("Total individual violations: {}", summary.total_violations));
    lines.push(String::new());

    section(&mut lines, "COMPLETENESS (per field, % non-empty)", '-');
    for (field, pct) in &summary.completeness {
        lines.push(format!("- {field}: {pct:.1}%"));
    }
    lines.push(String::new());

    section(&mut lines, "COMMON VALIDATION FAILURES", '-');
    if summary.failure_counts.is_empty() {
        lines.push("No validation failures.".to_string());
    } else {
        for ((field, kind), count) in summary.failure_counts.most_common(TOP_FAILURES) {
            lines.push(format!("- {field} / {kind}: {count} occurrences"));
        }
    }
    lines.push(String::new());

    lines.push("DETAILS (per record)".to_string());
    lines.push("-".repeat(21));

    for (idx, (record, violations)) in records.iter().zip(per_record_violations).enumerate() {
        let seq = idx + 1;
        let id = record
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("# {seq}"));
        lines.push(format!("Record {seq} (id={id})"));

        if violations.is_empty() {
            lines.push("  OK".to_string());
        } else {
            for v in violations {
                lines.push(format!("  - [{}] {}: {}", v.field, v.kind, v.message));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Push a heading and its underline.
fn section(lines: &mut Vec<String>, title: &str, underline: char) {
    lines.push(title.to_string());
    lines.push(underline.to_string().repeat(title.chars().count()));
}
