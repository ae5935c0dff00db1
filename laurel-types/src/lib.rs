//! Laurel-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod report;

pub use config::{ImportConfig, LaurelConfig, ZeroIntervalPolicy};
pub use error::LaurelError;
pub use record::AwardRecord;
pub use report::{IntervalReport, ProducerInterval, ProducerWins};
