//! Configuration types shared by the engine, the importer, and the orchestrator.

use serde::{Deserialize, Serialize};

/// How intervals of zero years (two wins by one producer in the same year) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroIntervalPolicy {
    /// Keep zero intervals as regular candidates for the minimum.
    #[default]
    Include,
    /// Drop zero intervals before the extremes are computed.
    Exclude,
}

/// Options for reading award records from delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Value of the `winner` column that marks a win, compared ASCII case-insensitively.
    pub winner_token: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            winner_token: "yes".to_string(),
        }
    }
}

/// Global configuration for the `Laurel` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaurelConfig {
    /// Treatment of same-year repeat wins.
    pub zero_intervals: ZeroIntervalPolicy,
    /// Options used when records are loaded from CSV.
    pub import: ImportConfig,
}
