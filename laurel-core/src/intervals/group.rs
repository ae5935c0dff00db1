use std::collections::HashMap;

use crate::producers::split_producers;
use laurel_types::{AwardRecord, ProducerWins};

/// Group the years of winning records by producer name.
///
/// - Non-winning records are skipped, so pre-filtered input gives the same result.
/// - Each producer credited on a record receives that record's year.
/// - Names are compared after trimming; identical names share one bucket.
/// - Buckets are returned in first-seen order; years keep record order and are not sorted.
#[must_use]
pub fn group_wins(records: &[AwardRecord]) -> Vec<ProducerWins> {
    let mut buckets: Vec<ProducerWins> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.winner) {
        for name in split_producers(&record.producers) {
            let slot = *index.entry(name).or_insert_with(|| {
                buckets.push(ProducerWins {
                    producer: name.to_string(),
                    years: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].years.push(record.year);
        }
    }
    buckets
}
