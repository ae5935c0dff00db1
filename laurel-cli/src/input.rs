//! Record source handling shared by commands

use anyhow::{Context, Result, bail};
use laurel::{AwardRecord, Laurel, LaurelBuilder};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::SourceArgs;

/// Apply the source flags to a builder.
pub fn configure(builder: LaurelBuilder, source: &SourceArgs) -> Result<LaurelBuilder> {
    if !source.delimiter.is_ascii() {
        bail!("delimiter {:?} is not an ASCII character", source.delimiter);
    }
    // ASCII chars fit in one byte
    let delimiter = source.delimiter as u8;
    Ok(builder
        .delimiter(delimiter)
        .winner_token(source.winner_token.as_str()))
}

/// Load records from the configured file or stdin.
pub fn load(laurel: &Laurel, input: &Path) -> Result<Vec<AwardRecord>> {
    let records = if input == Path::new("-") {
        tracing::debug!("reading records from stdin");
        laurel
            .load_csv(io::stdin().lock())
            .context("Failed to read records from stdin")?
    } else {
        tracing::debug!("reading records from {}", input.display());
        let file = File::open(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
        laurel
            .load_csv(BufReader::new(file))
            .with_context(|| format!("Failed to read records from {}", input.display()))?
    };
    tracing::info!(records = records.len(), "loaded award records");
    Ok(records)
}

/// Write a value as JSON to stdout followed by a newline.
pub fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
