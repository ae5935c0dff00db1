use laurel_types::{ProducerInterval, ProducerWins};

/// Derive one interval per pair of chronologically adjacent wins.
///
/// Years are sorted ascending first, so the result never carries a negative
/// interval. A producer with fewer than two wins yields nothing; `n` wins
/// yield `n - 1` entries. Same-year repeat wins yield a zero interval.
#[must_use]
pub fn derive_intervals(wins: &ProducerWins) -> Vec<ProducerInterval> {
    let mut years = wins.years.clone();
    years.sort_unstable();
    years
        .windows(2)
        .map(|pair| ProducerInterval::new(wins.producer.as_str(), pair[0], pair[1]))
        .collect()
}
