//! Input records fed to the interval engine.

use serde::{Deserialize, Serialize};

/// One entry of an award competition: a title released in `year`, credited to
/// one or more producers, which either won or did not.
///
/// `producers` is kept raw; multiple names are separated by commas or the word
/// `and` and are split by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwardRecord {
    /// Competition year.
    pub year: i32,
    /// Title of the nominated work.
    #[serde(default)]
    pub title: String,
    /// Studios credited on the work.
    #[serde(default)]
    pub studios: String,
    /// Raw producers field, possibly naming several producers.
    pub producers: String,
    /// Whether the work won in its year.
    pub winner: bool,
}

impl AwardRecord {
    /// Build a record with empty title and studios.
    pub fn new(year: i32, producers: impl Into<String>, winner: bool) -> Self {
        Self {
            year,
            title: String::new(),
            studios: String::new(),
            producers: producers.into(),
            winner,
        }
    }

    /// Shorthand for a winning record.
    pub fn win(year: i32, producers: impl Into<String>) -> Self {
        Self::new(year, producers, true)
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the studios.
    #[must_use]
    pub fn with_studios(mut self, studios: impl Into<String>) -> Self {
        self.studios = studios.into();
        self
    }
}
