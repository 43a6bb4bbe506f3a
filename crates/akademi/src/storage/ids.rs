//! Identifier generation for new records.

use chrono::Utc;

use crate::content::IdStrategy;

/// Produce an id for a new record, given the ids already in the collection.
///
/// Timestamp ids are bumped past any existing id they would collide with,
/// so two records created within the same millisecond still differ.
#[must_use]
pub fn next_id<'a>(strategy: IdStrategy, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    match strategy {
        IdStrategy::Timestamp => timestamp_id(Utc::now().timestamp_millis(), existing),
        IdStrategy::Sequential => sequential_id(existing),
    }
}

fn timestamp_id<'a>(now_millis: i64, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut candidate = now_millis;
    while existing.clone().any(|id| id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

fn sequential_id<'a>(existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .map(|id| id.parse::<u128>().unwrap_or(0))
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}
