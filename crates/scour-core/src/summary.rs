//! Dataset-level validation and aggregate statistics.

use std::collections::HashMap;

use crate::types::{CanonicalRecord, Field, Violation, ViolationKind};
use crate::validator::validate_record;

/// Aggregate statistics over one validated dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_records: usize,
    pub total_violations: usize,
    pub records_with_violations: usize,
    pub records_without_violations: usize,
    /// Percentage of records with the field populated, rounded to one
    /// decimal place, in [`Field::ALL`] order.
    pub completeness: Vec<(Field, f64)>,
    pub failure_counts: FailureCounts,
}

impl Summary {
    pub fn completeness_of(&self, field: Field) -> f64 {
        self.completeness
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, pct)| *pct)
            .unwrap_or(0.0)
    }
}

/// Occurrence counts per `(field, kind)` pair, remembering the order in
/// which each pair was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailureCounts {
    entries: Vec<((Field, ViolationKind), usize)>,
    index: HashMap<(Field, ViolationKind), usize>,
}

impl FailureCounts {
    pub fn record(&mut self, violation: &Violation) {
        let key = (violation.field, violation.kind);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, field: Field, kind: ViolationKind) -> usize {
        self.index
            .get(&(field, kind))
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The `n` most frequent pairs, highest count first. Equal counts keep
    /// first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<((Field, ViolationKind), usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a Violation> for FailureCounts {
    fn from_iter<I: IntoIterator<Item = &'a Violation>>(iter: I) -> Self {
        let mut counts = FailureCounts::default();
        for violation in iter {
            counts.record(violation);
        }
        counts
    }
}

/// Validate every record and aggregate the results.
///
/// The returned violation lists correspond 1:1 with `records`.
pub fn validate_dataset(records: &[CanonicalRecord]) -> (Vec<Vec<Violation>>, Summary) {
    let per_record: Vec<Vec<Violation>> = records.iter().map(validate_record).collect();

    let total_records = records.len();
    let total_violations: usize = per_record.iter().map(Vec::len).sum();
    let records_with_violations = per_record.iter().filter(|v| !v.is_empty()).count();

    let completeness: Vec<(Field, f64)> = Field::ALL
        .iter()
        .map(|&field| {
            let populated = records.iter().filter(|r| r.is_populated(field)).count();
            (field, percentage(populated, total_records))
        })
        .collect();

    let failure_counts: FailureCounts = per_record.iter().flatten().collect();

    tracing::debug!(
        records = total_records,
        violations = total_violations,
        invalid = records_with_violations,
        "validated dataset"
    );

    let summary = Summary {
        total_records,
        total_violations,
        records_with_violations,
        records_without_violations: total_records - records_with_violations,
        completeness,
        failure_counts,
    };
    (per_record, summary)
}

/// Rounded to one decimal on the exact binary value, ties to even, so
/// 1 of 16 is `6.2` rather than `6.3`.
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * part as f64 / total as f64;
    format!("{pct:.1}").parse().unwrap_or(pct)
}
