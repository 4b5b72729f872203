//! Rendering of [`DayReport`]s: JSON for machines, CSV for spreadsheets.

use anyhow::{Context, Result};
use muhurat_engine::{Category, DayReport, DayScope, DayView, Interval, Spill};

/// CSV column order after the date.
const COLUMNS: [Category; 9] = Category::ALL;
const CONDUCIVE_COLUMN: &str = "Conducive Intervals";

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn day_json(day: &DayReport) -> Result<String> {
    serde_json::to_string_pretty(&DayView::from(day)).context("Failed to serialize day")
}

pub fn range_json(days: &[DayReport]) -> Result<String> {
    let views: Vec<DayView> = days.iter().map(DayView::from).collect();
    serde_json::to_string_pretty(&views).context("Failed to serialize range")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One row per day. Each cell lists that column's windows, one per line,
/// quoted so spreadsheets keep the line breaks. Categories missing from the
/// input become empty cells.
pub fn csv(days: &[DayReport]) -> String {
    let mut out = header();
    for day in days {
        out.push_str(&row(day));
        out.push('\n');
    }
    out
}

fn header() -> String {
    let mut cols = vec!["Date".to_string()];
    cols.extend(COLUMNS.iter().map(Category::to_string));
    cols.push(CONDUCIVE_COLUMN.to_string());
    format!("{}\n", cols.join(","))
}

fn row(day: &DayReport) -> String {
    let mut cells = vec![day.date.format("%Y-%b-%d").to_string()];
    for category in COLUMNS {
        cells.push(match day.intervals(category.label()) {
            Some(intervals) => cell(intervals, &day.scope),
            None => String::new(),
        });
    }
    cells.push(cell(&day.conducive, &day.scope));
    cells.join(",")
}

fn cell(intervals: &[Interval], scope: &DayScope) -> String {
    let lines: Vec<String> = intervals.iter().map(|i| describe(i, scope)).collect();
    format!("\"{}\"", lines.join("\n"))
}

/// `09:00 AM - 10:30 AM (1h 30m)`, prefixed `+ ` for next-day and `- ` for
/// previous-day windows.
fn describe(interval: &Interval, scope: &DayScope) -> String {
    let minutes = interval.duration().num_minutes();
    let text = format!(
        "{} - {} ({}h {}m)",
        interval.start.format("%I:%M %p"),
        interval.stop.format("%I:%M %p"),
        minutes / 60,
        minutes % 60
    );
    match scope.spill(interval) {
        Spill::NextDay => format!("+ {}", text),
        Spill::PreviousDay => format!("- {}", text),
        Spill::SameDay => text,
    }
}
