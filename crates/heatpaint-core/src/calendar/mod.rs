// crates/heatpaint-core/src/calendar/mod.rs

pub mod clock;
pub mod mapper;
pub mod week;

use chrono::{DateTime, FixedOffset, SecondsFormat};

pub use clock::PaintClock;
pub use mapper::events_for;
pub use week::WeekStart;

/// ISO-8601, second precision, explicit offset: `2015-01-04T12:00:00+01:00`.
/// This is the form handed to git and written to the pixel log.
pub fn iso_seconds(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}
