//! Error types for muhurat-engine operations.
//!
//! Malformed windows never surface here: they are skipped by the parser. Only
//! problems at the API edge (the zone, the calendar date) are fatal.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Local midnight of {date} does not exist in {timezone}")]
    NonexistentMidnight { date: NaiveDate, timezone: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
