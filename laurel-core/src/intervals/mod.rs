//! Interval engine stages.
//!
//! Modules include:
//! - `group`: accumulate winning years per producer
//! - `derive`: turn sorted years into consecutive-win intervals
//! - `select`: pick every entry matching the global minimum and maximum
//! - `report`: the end-to-end pipeline over award records
/// Per-producer accumulation of winning years.
pub mod group;
/// Consecutive-win interval derivation.
pub mod derive;
/// Two-pass extreme selection.
pub mod select;
/// End-to-end report computation.
pub mod report;
