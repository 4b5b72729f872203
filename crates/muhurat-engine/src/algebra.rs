//! Union and difference over sets of intervals.
//!
//! These operators know nothing about categories; [`crate::conducive`] applies
//! them to the favorable and unfavorable groups.

use crate::interval::Interval;

/// Union of `intervals`: sort by start, then merge overlapping **or touching**
/// intervals (`next.start <= last.stop`).
///
/// Unlike [`crate::normalize::normalize`], `[08:00, 09:00)` and
/// `[09:00, 10:00)` become one interval here. Zero-length and inverted inputs
/// are dropped, so every output interval satisfies `start < stop` and
/// `out[i].stop < out[i + 1].start`.
pub fn merge_all(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.iter().filter(|i| !i.is_empty()).copied().collect();
    sorted.sort_by_key(|i| i.start);

    let mut merged: Vec<Interval> = Vec::new();
    for current in sorted {
        if let Some(last) = merged.last_mut() {
            if current.start <= last.stop {
                last.stop = last.stop.max(current.stop);
                continue;
            }
        }
        merged.push(current);
    }

    merged
}

/// Remove `removal` from `a`, leaving zero, one or two pieces in order.
///
/// - No overlap (`removal` ends at or before `a` starts, or starts at or after
///   `a` ends): `[a]`.
/// - Otherwise the left remainder `[a.start, removal.start)` when `removal`
///   starts inside `a`, and the right remainder `[removal.stop, a.stop)` when
///   `removal` ends inside `a`. A removal strictly inside `a` leaves a hole; one
///   covering `a` leaves nothing.
///
/// Pieces with `start >= stop` are discarded.
pub fn subtract(a: &Interval, removal: &Interval) -> Vec<Interval> {
    if removal.stop <= a.start || removal.start >= a.stop {
        return vec![*a];
    }

    let mut pieces = Vec::with_capacity(2);
    if removal.start > a.start {
        pieces.push(Interval::new(a.start, removal.start.min(a.stop)));
    }
    if removal.stop < a.stop {
        pieces.push(Interval::new(removal.stop.max(a.start), a.stop));
    }
    pieces.retain(|p| !p.is_empty());
    pieces
}

/// Subtract every interval of `unavailable` from every interval of `available`.
///
/// Both inputs are expected to be merged already (see [`merge_all`]). Each
/// available interval is folded through the removals in turn; the per-interval
/// remainders are concatenated in `available` order.
pub fn subtract_many(available: &[Interval], unavailable: &[Interval]) -> Vec<Interval> {
    let mut result = Vec::new();

    for interval in available {
        let mut remaining = vec![*interval];
        for removal in unavailable {
            remaining = remaining
                .iter()
                .flat_map(|piece| subtract(piece, removal))
                .collect();
            if remaining.is_empty() {
                break;
            }
        }
        result.extend(remaining);
    }

    result
}
