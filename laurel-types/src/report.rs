//! Derived interval entries and the min/max report envelope.

use serde::{Deserialize, Serialize};

/// Gap between two chronologically consecutive wins of one producer.
///
/// Serialized as `{ "producer", "interval", "previousWin", "followingWin" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    /// Trimmed producer name.
    pub producer: String,
    /// `following_win - previous_win`; never negative.
    pub interval: i32,
    /// Year of the earlier win.
    pub previous_win: i32,
    /// Year of the later win.
    pub following_win: i32,
}

impl ProducerInterval {
    /// Build an entry from two win years, computing the interval.
    ///
    /// The subtraction saturates, so years spanning more than `i32::MAX`
    /// yield `i32::MAX` instead of overflowing.
    pub fn new(producer: impl Into<String>, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer: producer.into(),
            interval: following_win.saturating_sub(previous_win),
            previous_win,
            following_win,
        }
    }
}

/// Win years accumulated for one producer, in the order they were seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerWins {
    /// Trimmed producer name.
    pub producer: String,
    /// Years of winning records crediting this producer. Unsorted.
    pub years: Vec<i32>,
}

/// Producers holding the smallest and the largest consecutive-win interval.
///
/// Every entry of `min` carries the same interval value, as does every entry of
/// `max`. Both lists are empty exactly when no interval could be derived. When
/// the dataset has a single distinct interval value, the same entries appear in
/// both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IntervalReport {
    /// Entries matching the global minimum interval.
    pub min: Vec<ProducerInterval>,
    /// Entries matching the global maximum interval.
    pub max: Vec<ProducerInterval>,
}

impl IntervalReport {
    /// True when no producer had two qualifying wins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }

    /// The global minimum interval value, if any.
    #[must_use]
    pub fn min_interval(&self) -> Option<i32> {
        self.min.first().map(|p| p.interval)
    }

    /// The global maximum interval value, if any.
    #[must_use]
    pub fn max_interval(&self) -> Option<i32> {
        self.max.first().map(|p| p.interval)
    }
}
