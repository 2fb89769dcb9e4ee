// crates/heatpaint-core/src/calendar/mapper.rs

use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta};

use crate::calendar::week::WeekStart;
use crate::error::{PaintError, Result};
use crate::raster::bitmap::Bitmap;
use crate::timeline::event::Event;

/// Map every on cell of `bitmap` to a dated event.
///
/// Column `c` is week `c` after `start`, row `r` is day `r` of that week:
/// `timestamp = start + weeks(c) + days(r)`. Events come out row-major.
///
/// `start` must fall on `week_start`, otherwise the columns would straddle two
/// calendar weeks and the picture would shear.
pub fn events_for(
    bitmap: &Bitmap,
    start: DateTime<FixedOffset>,
    tag: &str,
    week_start: WeekStart,
) -> Result<Vec<Event>> {
    let actual = start.weekday();
    if actual != week_start.weekday() {
        return Err(PaintError::MisalignedStartDate {
            date: start.date_naive(),
            actual,
            expected: week_start.weekday(),
        });
    }

    let label: Arc<str> = Arc::from(tag);
    let events = bitmap
        .on_cells()
        .map(|(row, col)| {
            let ts = start + TimeDelta::weeks(col as i64) + TimeDelta::days(row as i64);
            Event::new(ts, Arc::clone(&label))
        })
        .collect();

    Ok(events)
}
