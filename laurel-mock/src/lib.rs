//! Deterministic award-record datasets for tests and demos.
//!
//! Each dataset comes both as a `Vec<AwardRecord>` and, where useful, as the
//! equivalent semicolon-delimited text, so import and engine paths can be
//! checked against the same expectations.

use laurel_core::{AwardRecord, IntervalReport};

mod fixtures;

pub use fixtures::golden::GOLDEN_CSV;

/// A slice of worst-picture history: twenty-two nominated works, two of them
/// losers, with shortest gap Joel Silver 1990→1991 and longest gap Matthew
/// Vaughn 2002→2015.
#[must_use]
pub fn golden() -> Vec<AwardRecord> {
    fixtures::golden::records()
}

/// The report the engine must produce for [`golden`] and [`GOLDEN_CSV`].
#[must_use]
pub fn golden_expected() -> IntervalReport {
    fixtures::golden::expected()
}

/// Two producers with one three-year gap each; both appear in `min` and `max`.
#[must_use]
pub fn tied() -> Vec<AwardRecord> {
    fixtures::edge::tied()
}

/// A producer who won twice in one year next to a regular eleven-year gap.
#[must_use]
pub fn same_year_double() -> Vec<AwardRecord> {
    fixtures::edge::same_year_double()
}

/// Only losing records; no interval can be derived.
#[must_use]
pub fn no_winners() -> Vec<AwardRecord> {
    fixtures::edge::no_winners()
}
