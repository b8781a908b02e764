//! Domain-specific assertion macros for scour harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record and *which* rule an assertion was about.

// ---------------------------------------------------------------------------
// Violation assertions
// ---------------------------------------------------------------------------

/// Assert that a violation list is exactly the given `(field, kind)` pairs,
/// in order. Messages are not compared.
///
/// ```rust
/// assert_violations!(violations, [(Field::Url, ViolationKind::InvalidFormat)]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($violations:expr, [$(($field:expr, $kind:expr)),* $(,)?]) => {{
        let violations: &[scour_core::Violation] = &$violations;
        let actual: Vec<(scour_core::Field, scour_core::ViolationKind)> =
            violations.iter().map(|v| (v.field, v.kind)).collect();
        let expected: Vec<(scour_core::Field, scour_core::ViolationKind)> =
            vec![$(($field, $kind)),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_violations! failed; full violations: {:#?}", violations
        );
    }};
}

/// Assert that a violation list contains a `(field, kind)` pair.
#[macro_export]
macro_rules! assert_has_violation {
    ($violations:expr, $field:expr, $kind:expr) => {{
        let violations: &[scour_core::Violation] = &$violations;
        let field: scour_core::Field = $field;
        let kind: scour_core::ViolationKind = $kind;
        if !violations.iter().any(|v| v.field == field && v.kind == kind) {
            panic!(
                "assert_has_violation! failed: no {}/{} violation.\n  Present: {:?}",
                field,
                kind,
                violations.iter().map(|v| format!("{}/{}", v.field, v.kind)).collect::<Vec<_>>()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that every canonical field is populated or explicitly empty; in
/// other words that the record serializes with all seven keys.
#[macro_export]
macro_rules! assert_full_shape {
    ($record:expr) => {{
        let record: &scour_core::CanonicalRecord = &$record;
        let value = serde_json::to_value(record).expect("canonical record must serialize");
        let object = value.as_object().expect("canonical record must be an object");
        for field in scour_core::Field::ALL {
            if !object.contains_key(field.as_str()) {
                panic!(
                    "assert_full_shape! failed: key {:?} missing.\n  record: {}",
                    field.as_str(),
                    value
                );
            }
        }
        if object.len() != scour_core::Field::ALL.len() {
            panic!(
                "assert_full_shape! failed: expected {} keys, found {}.\n  record: {}",
                scour_core::Field::ALL.len(),
                object.len(),
                value
            );
        }
    }};
}

/// Assert that a report contains a line exactly equal to `$line`.
#[macro_export]
macro_rules! assert_report_line {
    ($report:expr, $line:expr) => {{
        let report: &str = &$report;
        let line: &str = $line;
        if !report.lines().any(|l| l == line) {
            panic!(
                "assert_report_line! failed: line {:?} not found.\n--- report ---\n{}",
                line, report
            );
        }
    }};
}
