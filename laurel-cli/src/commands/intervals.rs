//! Intervals command implementation

use anyhow::{Context, Result};
use laurel::{Laurel, ZeroIntervalPolicy};

use crate::SourceArgs;
use crate::input;

pub fn execute(source: &SourceArgs, exclude_zero: bool, pretty: bool) -> Result<()> {
    let policy = if exclude_zero {
        ZeroIntervalPolicy::Exclude
    } else {
        ZeroIntervalPolicy::Include
    };
    let laurel = input::configure(Laurel::builder().zero_intervals(policy), source)?
        .build()
        .context("Invalid import options")?;

    let records = input::load(&laurel, &source.input)?;
    let report = laurel.intervals(&records);

    if report.is_empty() {
        tracing::warn!("no producer has two qualifying wins");
    }
    input::print_json(&report, pretty)
}
