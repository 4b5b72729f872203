//! Compute free time within a day from the busy categories.
//!
//! Unions every busy category, normalizes the union against the day scope,
//! then walks the gaps between busy periods.

use crate::category::{collect_group, DayIntervals, BUSY};
use crate::interval::{DayScope, Interval};
use crate::normalize::normalize_in;

/// Free windows within `[scope.given, scope.next_day)` not covered by any
/// [`BUSY`] category in `day`.
///
/// A day with no busy intervals yields one interval spanning the whole day.
/// Busy intervals starting at or after `next_day` are ignored. Output is
/// sorted by start.
pub fn free_time(scope: &DayScope, day: &DayIntervals) -> Vec<Interval> {
    let busy = collect_group(day, &BUSY);
    free_between(scope, &busy)
}

/// Gaps in `[scope.given, scope.next_day)` around an arbitrary busy list.
pub fn free_between(scope: &DayScope, busy: &[Interval]) -> Vec<Interval> {
    let merged = normalize_in(busy, scope);

    let mut free = Vec::new();
    let mut cursor = scope.given;

    for interval in &merged {
        if cursor >= scope.next_day {
            break;
        }
        if cursor < interval.start {
            free.push(Interval::new(cursor, interval.start.min(scope.next_day)));
        }
        cursor = cursor.max(interval.stop);
    }

    // Trailing free time after the last busy period, up to the day boundary.
    if cursor < scope.next_day {
        free.push(Interval::new(cursor, scope.next_day));
    }

    free.sort();
    free
}
