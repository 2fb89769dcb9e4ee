// crates/heatpaint-core/src/error.rs

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaintError>;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),

    #[error("start date {date} is a {actual:?}, calendar weeks start on {expected:?}")]
    MisalignedStartDate {
        date: NaiveDate,
        actual: Weekday,
        expected: Weekday,
    },

    #[error("precondition failed: {0}")]
    AbortedPrecondition(String),

    #[error("timeline format error (line {line}): {reason}")]
    TimelineFormat { line: usize, reason: String },

    #[error("`{command}` failed ({status}): {stderr}")]
    Vcs {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
