use std::io::Read;

use laurel_core::{
    AwardRecord, IntervalReport, LaurelConfig, LaurelError, ProducerWins, ZeroIntervalPolicy,
};

/// Computes interval reports under one fixed configuration.
#[derive(Debug, Clone)]
pub struct Laurel {
    pub(crate) cfg: LaurelConfig,
}

/// Builder for constructing a `Laurel` with custom configuration.
#[derive(Debug, Clone)]
pub struct LaurelBuilder {
    cfg: LaurelConfig,
}

impl Default for LaurelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LaurelBuilder {
    /// Create a new builder with defaults: zero intervals kept, `;` delimiter,
    /// `yes` as the winner token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: LaurelConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: LaurelConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Choose how same-year repeat wins are treated.
    ///
    /// - `Include` keeps them, so a double win in one year becomes the minimum
    ///   with interval 0.
    /// - `Exclude` drops them before extremes are computed; a producer whose
    ///   only gaps are zero then contributes nothing.
    #[must_use]
    pub const fn zero_intervals(mut self, policy: ZeroIntervalPolicy) -> Self {
        self.cfg.zero_intervals = policy;
        self
    }

    /// Set the field delimiter used by CSV loading.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: u8) -> Self {
        self.cfg.import.delimiter = delimiter;
        self
    }

    /// Set the `winner` column value that marks a win (compared ignoring ASCII case).
    #[must_use]
    pub fn winner_token(mut self, token: impl Into<String>) -> Self {
        self.cfg.import.winner_token = token.into();
        self
    }

    /// Build the `Laurel` instance.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the delimiter is non-ASCII, a quote, or a line
    /// break, or if the winner token is empty after trimming.
    pub fn build(mut self) -> Result<Laurel, LaurelError> {
        let d = self.cfg.import.delimiter;
        if !d.is_ascii() || matches!(d, b'"' | b'\n' | b'\r') {
            return Err(LaurelError::invalid_arg(format!(
                "delimiter {:?} cannot separate CSV fields",
                char::from(d)
            )));
        }

        let token = self.cfg.import.winner_token.trim();
        if token.is_empty() {
            return Err(LaurelError::invalid_arg(
                "winner token must not be empty; every blank cell would count as a win",
            ));
        }
        self.cfg.import.winner_token = token.to_string();

        Ok(Laurel { cfg: self.cfg })
    }
}

impl Laurel {
    /// Start building a new `Laurel` instance.
    #[must_use]
    pub fn builder() -> LaurelBuilder {
        LaurelBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &LaurelConfig {
        &self.cfg
    }

    /// Compute the min/max interval report for in-memory records.
    ///
    /// Records are assumed well formed; nothing is re-validated here.
    #[must_use]
    pub fn intervals(&self, records: &[AwardRecord]) -> IntervalReport {
        laurel_core::calculate_intervals_with(records, &self.cfg)
    }

    /// Winning years grouped per producer, in first-seen order and unsorted.
    #[must_use]
    pub fn producer_wins(&self, records: &[AwardRecord]) -> Vec<ProducerWins> {
        laurel_core::group_wins(records)
    }

    /// Read award records from delimited text using the configured import options.
    ///
    /// # Errors
    /// Propagates `InvalidRecord`, `Csv`, and `Io` failures from the reader.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "laurel::core::load_csv", skip(self, reader))
    )]
    pub fn load_csv<R: Read>(&self, reader: R) -> Result<Vec<AwardRecord>, LaurelError> {
        laurel_core::read_records(reader, &self.cfg.import)
    }

    /// Read award records and compute their interval report in one step.
    ///
    /// # Errors
    /// Fails only if loading fails; see [`Laurel::load_csv`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "laurel::core::intervals_from_csv", skip(self, reader))
    )]
    pub fn intervals_from_csv<R: Read>(&self, reader: R) -> Result<IntervalReport, LaurelError> {
        let records = self.load_csv(reader)?;

        #[cfg(feature = "tracing")]
        tracing::info!(records = records.len(), "computing intervals from csv");

        Ok(self.intervals(&records))
    }
}
