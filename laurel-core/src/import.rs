//! Award records from delimited text.
//!
//! The expected layout is a header row followed by one row per nominated work:
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! 1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
//! ```
//!
//! Columns are matched by header name, so their order is free and unknown
//! columns are ignored. `title` and `studios` may be absent.

use std::io::Read;
use std::ops::RangeInclusive;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::producers::split_producers;
use laurel_types::{AwardRecord, ImportConfig, LaurelError};

/// Calendar years accepted in the `year` column.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    studios: String,
    producers: String,
    #[serde(default)]
    winner: String,
}

/// Read award records from a delimited source.
///
/// - Fields are trimmed and blank lines are skipped.
/// - `winner` marks a win when it equals `cfg.winner_token` ignoring ASCII case;
///   any other value, empty included, is a loss.
///
/// # Errors
/// - `LaurelError::InvalidRecord` when a row's year is not an integer or lies
///   outside [`YEAR_RANGE`], or its producers field names nobody; `line` is
///   the row's 1-based line.
/// - `LaurelError::Csv` for structural problems such as ragged rows, invalid
///   UTF-8, or a missing `year`/`producers` column.
/// - `LaurelError::Io` when the reader fails.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "laurel::import",
        skip(reader, cfg),
        fields(delimiter = %char::from(cfg.delimiter)),
    )
)]
pub fn read_records<R: Read>(
    reader: R,
    cfg: &ImportConfig,
) -> Result<Vec<AwardRecord>, LaurelError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(cfg.delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let mut out = Vec::new();
    for raw in rdr.records() {
        let raw = raw.map_err(csv_error)?;
        out.push(to_record(&raw, &headers, cfg)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        records = out.len(),
        winners = out.iter().filter(|r| r.winner).count(),
        "imported award records"
    );

    Ok(out)
}

/// Parse award records from an in-memory string. See [`read_records`].
///
/// # Errors
/// Same as [`read_records`], minus I/O failures.
pub fn parse_records(input: &str, cfg: &ImportConfig) -> Result<Vec<AwardRecord>, LaurelError> {
    read_records(input.as_bytes(), cfg)
}

fn to_record(
    raw: &StringRecord,
    headers: &StringRecord,
    cfg: &ImportConfig,
) -> Result<AwardRecord, LaurelError> {
    let line = raw.position().map_or(0, csv::Position::line);
    let row: CsvRow = raw.deserialize(Some(headers)).map_err(csv_error)?;

    let year = row.year.parse::<i32>().map_err(|_| {
        LaurelError::invalid_record(line, format!("year `{}` is not an integer", row.year))
    })?;
    if !YEAR_RANGE.contains(&year) {
        return Err(LaurelError::invalid_record(
            line,
            format!(
                "year {year} is outside {}..={}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        ));
    }
    if split_producers(&row.producers).is_empty() {
        return Err(LaurelError::invalid_record(
            line,
            "producers field names no producer",
        ));
    }

    Ok(AwardRecord {
        year,
        title: row.title,
        studios: row.studios,
        producers: row.producers,
        winner: row.winner.eq_ignore_ascii_case(&cfg.winner_token),
    })
}

fn csv_error(e: csv::Error) -> LaurelError {
    let msg = e.to_string();
    match e.kind() {
        csv::ErrorKind::Io(_) => LaurelError::Io(msg),
        _ => LaurelError::Csv(msg),
    }
}
