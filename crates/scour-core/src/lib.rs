//! scour-core: record normalization, validation, and quality reporting.
//!
//! This crate holds the two pipeline stages plus the thin dataset I/O the
//! binary and integration harnesses build on.
//!
//! # Architecture
//!
//! ```text
//! raw records ──► Normalizer ──► canonical records ──► Validator ──► Report
//!                 (text, price, date)                  (rules, summary)
//! ```
//!
//! Everything except [`dataset`] and [`config`] is pure and total: malformed
//! input degrades to `None`/empty fields or to violations, never to errors.

pub mod config;
pub mod dataset;
pub mod date;
pub mod error;
pub mod normalizer;
pub mod price;
pub mod report;
pub mod summary;
pub mod text;
pub mod types;
pub mod validator;

pub use error::Error;
pub use normalizer::{normalize_dataset, normalize_record};
pub use report::generate_report;
pub use summary::{validate_dataset, FailureCounts, Summary};
pub use types::{CanonicalRecord, Field, RawRecord, Violation, ViolationKind};
pub use validator::validate_record;
