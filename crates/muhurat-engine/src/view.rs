//! Flat, serializable view of a [`DayReport`] for JSON consumers.
//!
//! Instants become RFC 3339 strings in the day's zone, and each interval
//! carries its length in minutes and where it sits relative to the day.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::day::DayReport;
use crate::interval::{DayScope, Interval, Spill};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalView {
    pub start: String,
    pub stop: String,
    pub duration_minutes: i64,
    pub day: Spill,
}

impl IntervalView {
    pub fn new(interval: &Interval, scope: &DayScope) -> Self {
        Self {
            start: interval.start.to_rfc3339(),
            stop: interval.stop.to_rfc3339(),
            duration_minutes: interval.duration().num_minutes(),
            day: scope.spill(interval),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub date: String,
    pub given: String,
    pub next_day: String,
    pub categories: BTreeMap<String, Vec<IntervalView>>,
    pub free: Vec<IntervalView>,
    pub conducive: Vec<IntervalView>,
}

impl From<&DayReport> for DayView {
    fn from(day: &DayReport) -> Self {
        let views = |intervals: &[Interval]| -> Vec<IntervalView> {
            intervals
                .iter()
                .map(|i| IntervalView::new(i, &day.scope))
                .collect()
        };

        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            given: day.scope.given.to_rfc3339(),
            next_day: day.scope.next_day.to_rfc3339(),
            categories: day
                .per_category
                .iter()
                .map(|(label, intervals)| (label.clone(), views(intervals)))
                .collect(),
            free: views(&day.free),
            conducive: views(&day.conducive),
        }
    }
}
