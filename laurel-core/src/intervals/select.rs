use laurel_types::{IntervalReport, ProducerInterval, ZeroIntervalPolicy};

/// Select every entry matching the global minimum and the global maximum interval.
///
/// The extremes are computed in a first pass and matched in a second, so ties
/// are kept in full and in input order. Under [`ZeroIntervalPolicy::Exclude`]
/// zero intervals are removed before either pass.
#[must_use]
pub fn select_extremes(
    intervals: Vec<ProducerInterval>,
    policy: ZeroIntervalPolicy,
) -> IntervalReport {
    let candidates: Vec<ProducerInterval> = match policy {
        ZeroIntervalPolicy::Include => intervals,
        ZeroIntervalPolicy::Exclude => intervals.into_iter().filter(|p| p.interval > 0).collect(),
    };

    let (Some(min_value), Some(max_value)) = (
        candidates.iter().map(|p| p.interval).min(),
        candidates.iter().map(|p| p.interval).max(),
    ) else {
        return IntervalReport::default();
    };

    let matching = |value: i32| -> Vec<ProducerInterval> {
        candidates
            .iter()
            .filter(|p| p.interval == value)
            .cloned()
            .collect()
    };

    IntervalReport {
        min: matching(min_value),
        max: matching(max_value),
    }
}
