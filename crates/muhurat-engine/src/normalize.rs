//! Sort, clip and merge a day's intervals into a canonical list.
//!
//! Merging here is **strict**: intervals that merely touch (`y.start == x.stop`)
//! stay separate. [`crate::algebra::merge_all`] uses the non-strict rule; the
//! two are kept apart because free-time boundaries depend on the strict one.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::interval::{DayScope, Interval};

/// Normalize `intervals` against the closed-open scope `[lower, upper)`.
///
/// 1. Sort by interval ordering.
/// 2. Drop intervals that end before `lower`.
/// 3. Clip `start` up to `lower`.
/// 4. Clip `stop` down to `upper` when the interval straddles `upper`.
///    Intervals starting at or after `upper` are kept as-is so callers can
///    label them as next-day windows.
/// 5. Merge overlapping intervals (strict `<`).
///
/// The input is not modified.
pub fn normalize(intervals: &[Interval], lower: DateTime<Tz>, upper: DateTime<Tz>) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let clipped = sorted
        .into_iter()
        .filter(|i| i.stop >= lower)
        .map(|mut i| {
            if i.start < lower {
                i.start = lower;
            }
            if i.start < upper && upper < i.stop {
                i.stop = upper;
            }
            i
        });

    let mut merged: Vec<Interval> = Vec::new();
    for interval in clipped {
        if let Some(last) = merged.last_mut() {
            if interval.start < last.stop {
                last.stop = last.stop.max(interval.stop);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// [`normalize`] bounded by a [`DayScope`].
pub fn normalize_in(intervals: &[Interval], scope: &DayScope) -> Vec<Interval> {
    normalize(intervals, scope.given, scope.next_day)
}
