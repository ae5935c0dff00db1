use laurel_core::{
    AwardRecord, LaurelConfig, ZeroIntervalPolicy, calculate_intervals, calculate_intervals_with,
    derive_intervals, group_wins,
};
use proptest::prelude::*;

const NAMES: &[&str] = &["Joel Silver", "Bo Derek", "Sandra Lee", "Matthew Vaughn", "Andy Vajna"];

fn arb_producers() -> impl Strategy<Value = String> {
    proptest::collection::vec(0usize..NAMES.len(), 1..4).prop_map(|idx| {
        let names: Vec<&str> = idx.iter().map(|&i| NAMES[i]).collect();
        match names.as_slice() {
            [one] => (*one).to_string(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
            [] => unreachable!(),
        }
    })
}

fn arb_record() -> impl Strategy<Value = AwardRecord> {
    (1980i32..2025i32, arb_producers(), any::<bool>())
        .prop_map(|(year, producers, winner)| AwardRecord::new(year, producers, winner))
}

fn arb_records() -> impl Strategy<Value = Vec<AwardRecord>> {
    proptest::collection::vec(arb_record(), 0..40)
}

proptest! {
    #[test]
    fn min_and_max_are_both_empty_or_both_populated(records in arb_records()) {
        let report = calculate_intervals(&records);
        prop_assert_eq!(report.min.is_empty(), report.max.is_empty());
    }

    #[test]
    fn every_entry_matches_the_global_extreme(records in arb_records()) {
        let all: Vec<_> = group_wins(&records).iter().flat_map(derive_intervals).collect();
        let report = calculate_intervals(&records);
        if let (Some(lo), Some(hi)) = (
            all.iter().map(|p| p.interval).min(),
            all.iter().map(|p| p.interval).max(),
        ) {
            prop_assert!(report.min.iter().all(|p| p.interval == lo));
            prop_assert!(report.max.iter().all(|p| p.interval == hi));
            prop_assert_eq!(report.min.len(), all.iter().filter(|p| p.interval == lo).count());
            prop_assert_eq!(report.max.len(), all.iter().filter(|p| p.interval == hi).count());
        } else {
            prop_assert!(report.is_empty());
        }
    }

    #[test]
    fn intervals_are_following_minus_previous_and_non_negative(records in arb_records()) {
        let report = calculate_intervals(&records);
        for p in report.min.iter().chain(report.max.iter()) {
            prop_assert_eq!(p.interval, p.following_win - p.previous_win);
            prop_assert!(p.interval >= 0);
        }
    }

    #[test]
    fn repeated_calls_agree(records in arb_records()) {
        prop_assert_eq!(calculate_intervals(&records), calculate_intervals(&records));
    }

    #[test]
    fn prefiltering_winners_changes_nothing(records in arb_records()) {
        let winners: Vec<AwardRecord> = records.iter().filter(|r| r.winner).cloned().collect();
        prop_assert_eq!(calculate_intervals(&records), calculate_intervals(&winners));
    }

    #[test]
    fn excluding_zero_intervals_leaves_only_positive_gaps(records in arb_records()) {
        let cfg = LaurelConfig {
            zero_intervals: ZeroIntervalPolicy::Exclude,
            ..LaurelConfig::default()
        };
        let report = calculate_intervals_with(&records, &cfg);
        prop_assert!(report.min.iter().chain(report.max.iter()).all(|p| p.interval > 0));
    }

    #[test]
    fn interval_count_is_wins_minus_one_per_producer(records in arb_records()) {
        for bucket in group_wins(&records) {
            prop_assert_eq!(derive_intervals(&bucket).len(), bucket.years.len().saturating_sub(1));
        }
    }
}
