//! Producers command implementation

use anyhow::{Context, Result};
use laurel::Laurel;

use crate::SourceArgs;
use crate::input;

pub fn execute(source: &SourceArgs, pretty: bool) -> Result<()> {
    let laurel = input::configure(Laurel::builder(), source)?
        .build()
        .context("Invalid import options")?;

    let records = input::load(&laurel, &source.input)?;
    let mut wins = laurel.producer_wins(&records);
    for w in &mut wins {
        w.years.sort_unstable();
    }
    input::print_json(&wins, pretty)
}
