//! Laurel reports which producers waited the least and the most between two
//! consecutive award wins.
//!
//! Overview
//! - Takes award records (year, raw producers field, win flag), either in
//!   memory or read from semicolon-delimited text.
//! - Splits shared credits such as `"A, B and C"` into individual producers.
//! - Derives every consecutive-win interval per producer and returns all
//!   entries matching the global minimum and maximum, ties included.
//!
//! Key behaviors
//! - Losing records are ignored; passing only winners gives the same result.
//! - Output order is deterministic: producers in first-seen order, each
//!   producer's intervals chronological.
//! - Zero intervals (two wins in one year) are kept by default; use
//!   [`ZeroIntervalPolicy::Exclude`] to drop them.
//! - One `Laurel` holds only configuration. Every call allocates its own
//!   accumulators, so a shared instance can serve concurrent callers.
//!
//! Examples
//! ```rust,ignore
//! use laurel::{AwardRecord, Laurel};
//!
//! let laurel = Laurel::builder().build()?;
//! let report = laurel.intervals(&[
//!     AwardRecord::win(1990, "Steven Perry and Joel Silver"),
//!     AwardRecord::win(1991, "Joel Silver"),
//! ]);
//! assert_eq!(report.min[0].producer, "Joel Silver");
//! ```
//!
//! Loading a CSV export:
//! ```rust,ignore
//! let file = std::fs::File::open("movielist.csv")?;
//! let report = Laurel::builder().build()?.intervals_from_csv(file)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use self::core::{Laurel, LaurelBuilder};

// Re-export core types for convenience
pub use laurel_core::{
    AwardRecord, ImportConfig, IntervalReport, LaurelConfig, LaurelError, ProducerInterval,
    ProducerWins, ZeroIntervalPolicy, split_producers,
};
