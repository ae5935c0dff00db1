use super::derive::derive_intervals;
use super::group::group_wins;
use super::select::select_extremes;
use laurel_types::{AwardRecord, IntervalReport, LaurelConfig, ProducerInterval};

/// Compute the min/max interval report with the default configuration.
///
/// Equivalent to [`calculate_intervals_with`] and `LaurelConfig::default()`,
/// which keeps zero intervals.
#[must_use]
pub fn calculate_intervals(records: &[AwardRecord]) -> IntervalReport {
    calculate_intervals_with(records, &LaurelConfig::default())
}

/// Compute which producers had the shortest and the longest gap between consecutive wins.
///
/// - Only winning records count; names are split and grouped per producer.
/// - Intervals are flattened in first-seen producer order, chronological
///   within a producer; that order carries into both output lists.
/// - An input without any producer holding two wins yields an empty report.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "laurel::intervals",
        skip(records, cfg),
        fields(records = records.len(), zero_intervals = ?cfg.zero_intervals),
    )
)]
#[must_use]
pub fn calculate_intervals_with(records: &[AwardRecord], cfg: &LaurelConfig) -> IntervalReport {
    let buckets = group_wins(records);
    let intervals: Vec<ProducerInterval> = buckets.iter().flat_map(derive_intervals).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        producers = buckets.len(),
        intervals = intervals.len(),
        "derived consecutive-win intervals"
    );

    let report = select_extremes(intervals, cfg.zero_intervals);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        min = ?report.min_interval(),
        max = ?report.max_interval(),
        min_entries = report.min.len(),
        max_entries = report.max.len(),
        "selected extreme intervals"
    );

    report
}
