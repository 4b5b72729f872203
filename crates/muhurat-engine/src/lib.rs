//! # muhurat-engine
//!
//! Day-scoped interval reconciliation for panchang timings.
//!
//! An upstream source publishes, per calendar day, a handful of named windows
//! (Rahu, Yamaganda, Amrit Kaal, ...) as raw `"HH:MM AM – HH:MM PM"` strings.
//! This crate turns them into clean, non-overlapping interval sets: the
//! normalized windows of each category, the free time left between the busy
//! categories, and the conducive time obtained by subtracting the unfavorable
//! group from the favorable one.
//!
//! Every operation is pure: inputs are borrowed, outputs are new vectors, and
//! the timezone is always an explicit argument.
//!
//! ## Modules
//!
//! - [`window`] — raw window strings → [`Interval`]s
//! - [`interval`] — the [`Interval`] value type and the [`DayScope`]
//! - [`normalize`] — sort, clip to a day, strict merge
//! - [`freetime`] — gaps between busy windows
//! - [`algebra`] — union (non-strict merge) and difference
//! - [`category`] — known categories and their fixed groups
//! - [`conducive`] — favorable minus unfavorable
//! - [`day`] — the per-day pipeline and the date-range driver
//! - [`view`] — serializable view of a day for JSON consumers
//! - [`error`] — Error types

pub mod algebra;
pub mod category;
pub mod conducive;
pub mod day;
pub mod error;
pub mod freetime;
pub mod interval;
pub mod normalize;
pub mod view;
pub mod window;

pub use algebra::{merge_all, subtract, subtract_many};
pub use category::{Category, DayIntervals};
pub use conducive::conducive;
pub use day::{compute_day, compute_range, DayReport, RawDay};
pub use error::EngineError;
pub use freetime::free_time;
pub use interval::{parse_timezone, total_duration, DayScope, Interval, Spill};
pub use normalize::normalize;
pub use view::{DayView, IntervalView};
pub use window::{parse_calendar_date, parse_window, RawWindows};
