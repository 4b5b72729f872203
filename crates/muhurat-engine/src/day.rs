//! The per-day pipeline and its date-range driver.
//!
//! Raw category strings → parsed windows → per-category normalization →
//! free time → conducive time.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::category::{Category, DayIntervals};
use crate::conducive::conducive;
use crate::error::Result;
use crate::freetime::free_time;
use crate::interval::{DayScope, Interval};
use crate::normalize::normalize_in;
use crate::window::{parse_windows, RawWindows};

/// One day's raw input: category label → raw window strings.
pub type RawDay = BTreeMap<String, RawWindows>;

/// Result of reconciling one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    /// Bounds used for clipping; also what a display layer needs to mark
    /// previous-day and next-day windows.
    pub scope: DayScope,
    /// Normalized intervals per input category (without `Free`).
    pub per_category: DayIntervals,
    pub free: Vec<Interval>,
    pub conducive: Vec<Interval>,
}

impl DayReport {
    /// Intervals for a label, with `Free` and conducive time resolved from the
    /// derived sets. Missing categories yield `None`.
    pub fn intervals(&self, label: &str) -> Option<&[Interval]> {
        if label == Category::Free.label() {
            return Some(&self.free);
        }
        self.per_category.get(label).map(Vec::as_slice)
    }
}

/// Reconcile one day.
///
/// Every category of `raw` is parsed against `date` in `tz` and normalized to
/// the day scope. Unparseable windows are skipped; a category whose windows
/// are all unparseable is present with an empty list.
///
/// # Errors
/// Returns `EngineError::NonexistentMidnight` when `date` has no local
/// midnight in `tz`.
pub fn compute_day(date: NaiveDate, tz: Tz, raw: &RawDay) -> Result<DayReport> {
    let scope = DayScope::for_date(date, tz)?;

    let per_category: DayIntervals = raw
        .iter()
        .map(|(label, windows)| {
            if label.parse::<Category>().is_err() {
                tracing::debug!(category = %label, "unclassified category, kept out of free and conducive time");
            }
            let parsed = parse_windows(windows, date, tz);
            if parsed.is_empty() {
                tracing::debug!(%date, category = %label, "no parseable windows");
            }
            (label.clone(), normalize_in(&parsed, &scope))
        })
        .collect();

    let free = free_time(&scope, &per_category);

    let mut with_free = per_category.clone();
    with_free.insert(Category::Free.label().to_string(), free.clone());
    let conducive = conducive(&with_free);

    Ok(DayReport {
        date,
        scope,
        per_category,
        free,
        conducive,
    })
}

/// Dates from `start` to `end` inclusive. Reversed bounds are swapped.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let (first, last) = if start <= end { (start, end) } else { (end, start) };
    let span = (last - first).num_days();
    (0..=span).map(move |offset| first + Duration::days(offset))
}

/// Reconcile every date in `[start, end]`.
///
/// `source` supplies the raw windows of a date, standing in for whatever
/// fetches them. Dates it has no data for are skipped.
///
/// # Errors
/// Propagates the first error from [`compute_day`].
pub fn compute_range<F>(start: NaiveDate, end: NaiveDate, tz: Tz, mut source: F) -> Result<Vec<DayReport>>
where
    F: FnMut(NaiveDate) -> Option<RawDay>,
{
    let mut reports = Vec::new();
    for date in days_inclusive(start, end) {
        match source(date) {
            Some(raw) => reports.push(compute_day(date, tz, &raw)?),
            None => tracing::debug!(%date, "no raw windows for date, skipping"),
        }
    }
    Ok(reports)
}
