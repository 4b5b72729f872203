//! Conducive time: favorable windows net of unfavorable ones.

use crate::algebra::{merge_all, subtract_many};
use crate::category::{collect_group, DayIntervals, FAVORABLE, UNFAVORABLE};
use crate::interval::Interval;

/// `merge_all(favorable) - merge_all(unfavorable)`.
///
/// `day` must already contain the day's `Free` windows (see
/// [`crate::freetime::free_time`]); [`crate::day::compute_day`] takes care of
/// that.
pub fn conducive(day: &DayIntervals) -> Vec<Interval> {
    let available = merge_all(&collect_group(day, &FAVORABLE));
    let unavailable = merge_all(&collect_group(day, &UNFAVORABLE));
    subtract_many(&available, &unavailable)
}
