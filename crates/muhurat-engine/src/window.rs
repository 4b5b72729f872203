//! Raw window strings → absolute [`Interval`]s.
//!
//! The upstream source renders each window as `"HH:MM AM – HH:MM PM"`, with an
//! en dash between the endpoints, sometimes a month/day on an endpoint
//! (`"Jan 02 01:28 AM"`), and sometimes a trailing note in parentheses.
//! Anything that does not fit is skipped, never defaulted.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::{localize, Interval};

/// Separator between the two endpoints of a window.
pub const EN_DASH: char = '\u{2013}';

/// Placeholder the source uses for "no window today".
pub const NIL: &str = "Nil";

/// Formats tried in order. Components a format lacks (year, month, day) are
/// taken from the reference date; a format without a time means midnight.
const FORMATS: &[&str] = &[
    "%I:%M %p",
    "%b %d %I:%M %p",
    "%b%d",
    "%d%b",
    "%b%d%Y",
    "%Y%b%d",
    "%d%b%Y",
    "%d%Y%b",
];

/// One category's raw windows: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawWindows {
    One(String),
    Many(Vec<String>),
}

impl RawWindows {
    pub fn as_slice(&self) -> &[String] {
        match self {
            RawWindows::One(s) => std::slice::from_ref(s),
            RawWindows::Many(v) => v,
        }
    }
}

impl From<&str> for RawWindows {
    fn from(s: &str) -> Self {
        RawWindows::One(s.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for RawWindows {
    fn from(list: [&str; N]) -> Self {
        RawWindows::Many(list.iter().map(|s| s.to_string()).collect())
    }
}

/// Parse every window of a category, skipping `Nil` and unparseable entries.
/// The result is sorted.
pub fn parse_windows(raw: &RawWindows, reference: NaiveDate, tz: Tz) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = raw
        .as_slice()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != NIL)
        .filter_map(|s| parse_window(s, reference, tz))
        .collect();
    intervals.sort();
    intervals
}

/// Parse one `"start – stop"` window anchored to `reference`.
///
/// When `stop` resolves earlier than `start`, the window crosses midnight and
/// `stop` is moved 24 hours forward. A window still inverted after that is
/// skipped.
pub fn parse_window(raw: &str, reference: NaiveDate, tz: Tz) -> Option<Interval> {
    let text = strip_annotation(raw);
    let tokens: Vec<&str> = text.split(EN_DASH).map(str::trim).collect();
    let [first, second] = tokens.as_slice() else {
        tracing::debug!(raw, "window does not split into two endpoints, skipping");
        return None;
    };

    let start = parse_endpoint(first, reference, tz)?;
    let mut stop = parse_endpoint(second, reference, tz)?;
    if stop < start {
        stop = stop + Duration::hours(24);
    }

    let interval = Interval::new(start, stop);
    if !interval.is_valid() {
        tracing::debug!(raw, %start, %stop, "window ends before it starts, skipping");
        return None;
    }
    Some(interval)
}

/// Parse a single endpoint token into an instant in `tz`.
pub fn parse_endpoint(token: &str, reference: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    let Some(naive) = parse_local(token, reference) else {
        tracing::debug!(token, "no known format matches endpoint");
        return None;
    };
    localize(tz, naive)
}

/// Parse a user-supplied calendar date such as `2024-01-05`, `2024-Jan-05` or
/// `05 Jan 2024`. Punctuation is ignored; missing components come from `today`.
///
/// # Errors
/// Returns `EngineError::InvalidDate` when no format matches.
pub fn parse_calendar_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    parse_local(&cleaned, today)
        .map(|dt| dt.date())
        .ok_or_else(|| EngineError::InvalidDate(raw.to_string()))
}

/// Drop a trailing `(...)` note, e.g. `"06:01 AM – 07:34 AM (Jan 02)"`.
fn strip_annotation(raw: &str) -> &str {
    match raw.rfind('(') {
        Some(idx) if idx > 0 => raw[..idx].trim(),
        _ => raw.trim(),
    }
}

fn parse_local(token: &str, reference: NaiveDate) -> Option<NaiveDateTime> {
    FORMATS
        .iter()
        .find_map(|fmt| parse_with_format(token, fmt, reference))
}

fn parse_with_format(token: &str, fmt: &str, reference: NaiveDate) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, token, StrftimeItems::new(fmt)).ok()?;

    if !fmt.contains("%Y") {
        parsed.set_year(i64::from(reference.year())).ok()?;
    }
    if !fmt.contains("%b") {
        parsed.set_month(i64::from(reference.month())).ok()?;
    }
    if !fmt.contains("%d") {
        parsed.set_day(i64::from(reference.day())).ok()?;
    }

    let mut date = parsed.to_naive_date().ok()?;
    if !fmt.contains("%Y") && fmt.contains("%b") {
        date = nearest_year(date, reference)?;
    }
    let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

/// A month/day without a year belongs to the year that puts it within six
/// months of `reference`: `Jan 01` next to Dec 31 is in the following year.
fn nearest_year(date: NaiveDate, reference: NaiveDate) -> Option<NaiveDate> {
    let months_ahead = i64::from(date.month()) - i64::from(reference.month());
    match months_ahead {
        m if m > 6 => date.with_year(date.year() - 1),
        m if m < -6 => date.with_year(date.year() + 1),
        _ => Some(date),
    }
}
