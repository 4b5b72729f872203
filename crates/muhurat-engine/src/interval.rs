//! The core value types: [`Interval`] and the [`DayScope`] that bounds a day's
//! computation.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{EngineError, Result};

/// A time window `[start, stop)` anchored to one civil zone.
///
/// Intervals order by `start`, ties broken by `stop` (field order matters for
/// the derived `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    pub start: DateTime<Tz>,
    pub stop: DateTime<Tz>,
}

impl Interval {
    pub fn new(start: DateTime<Tz>, stop: DateTime<Tz>) -> Self {
        Self { start, stop }
    }

    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }

    /// `start <= stop`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.stop
    }

    /// Zero or negative length. Such intervals never appear in algebra output.
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }

    /// Two intervals overlap iff `a.start < b.stop && b.start < a.stop`.
    /// Touching intervals do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

/// Sum of the durations of `intervals`.
pub fn total_duration(intervals: &[Interval]) -> Duration {
    intervals
        .iter()
        .fold(Duration::zero(), |acc, i| acc + i.duration())
}

/// Where an interval sits relative to a [`DayScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spill {
    PreviousDay,
    SameDay,
    NextDay,
}

/// The `[given, next_day)` bounds of one calendar day's computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayScope {
    pub given: DateTime<Tz>,
    pub next_day: DateTime<Tz>,
}

impl DayScope {
    /// `next_day` is always `given + 24h`, even across DST transitions.
    pub fn new(given: DateTime<Tz>) -> Self {
        Self {
            given,
            next_day: given + Duration::hours(24),
        }
    }

    /// Scope starting at local midnight of `date` in `tz`.
    ///
    /// # Errors
    /// Returns `EngineError::NonexistentMidnight` when the zone skips midnight
    /// on that date.
    pub fn for_date(date: NaiveDate, tz: Tz) -> Result<Self> {
        localize(tz, date.and_time(chrono::NaiveTime::MIN))
            .map(Self::new)
            .ok_or_else(|| EngineError::NonexistentMidnight {
                date,
                timezone: tz.name().to_string(),
            })
    }

    pub fn contains(&self, instant: DateTime<Tz>) -> bool {
        self.given <= instant && instant < self.next_day
    }

    /// Classify an interval by its start, for previous/next-day markers.
    pub fn spill(&self, interval: &Interval) -> Spill {
        if interval.start >= self.next_day {
            Spill::NextDay
        } else if interval.start < self.given {
            Spill::PreviousDay
        } else {
            Spill::SameDay
        }
    }

    /// The whole day as a single interval.
    pub fn as_interval(&self) -> Interval {
        Interval::new(self.given, self.next_day)
    }
}

/// Resolve a local wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earliest instant; times in
/// a DST gap do not exist and yield `None`.
pub(crate) fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => {
            tracing::warn!(%naive, timezone = tz.name(), "ambiguous local time, picking earliest");
            Some(earliest)
        }
        LocalResult::None => {
            tracing::warn!(%naive, timezone = tz.name(), "local time does not exist");
            None
        }
    }
}

/// Parse an IANA zone name.
///
/// # Errors
/// Returns `EngineError::InvalidTimezone` for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}
