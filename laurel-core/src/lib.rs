//! laurel-core
//!
//! Core algorithms shared across the laurel ecosystem.
//!
//! - `producers`: split a raw producers field into individual names.
//! - `intervals`: group wins per producer, derive consecutive-win intervals,
//!   and select the global minimum and maximum.
//! - `import`: read award records from delimited text.
//!
//! Everything here is synchronous and holds no state between calls; each
//! invocation owns its accumulation structures.
#![warn(missing_docs)]

/// Read award records from semicolon-delimited text.
pub mod import;
/// Interval engine: grouping, derivation, and extreme selection.
pub mod intervals;
/// Multi-valued producer field parsing.
pub mod producers;

pub use import::{YEAR_RANGE, parse_records, read_records};
pub use intervals::derive::derive_intervals;
pub use intervals::group::group_wins;
pub use intervals::report::{calculate_intervals, calculate_intervals_with};
pub use intervals::select::select_extremes;
pub use laurel_types::{
    AwardRecord, ImportConfig, IntervalReport, LaurelConfig, LaurelError, ProducerInterval,
    ProducerWins, ZeroIntervalPolicy,
};
pub use producers::split_producers;
