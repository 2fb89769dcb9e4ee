// crates/heatpaint-core/src/timeline/defaults.rs

use chrono::{FixedOffset, NaiveDate};

use crate::calendar::clock::PaintClock;
use crate::calendar::week::WeekStart;
use crate::timeline::period::{TimePeriod, TimelineConfig};

/// Commits land at midday.
pub const DEFAULT_HOUR: u32 = 12;

/// +01:00, fixed all year round.
pub const DEFAULT_OFFSET_SECS: i32 = 3600;

/// Built-in paint table. Every start date is a Sunday.
const DEFAULT_PERIODS: &[((i32, u32, u32), &str)] = &[
    ((2015, 1, 4), "I'M FREELANCE"),
    ((2020, 1, 5), "I'M CTO @ WEGROW"),
    ((2022, 1, 9), "I'M CTO @ WEGROW"),
    ((2024, 1, 7), "I'M CTO"),
    ((2025, 3, 9), "I'M CTO"),
];

pub fn default_clock() -> PaintClock {
    FixedOffset::east_opt(DEFAULT_OFFSET_SECS)
        .and_then(|offset| PaintClock::new(DEFAULT_HOUR, offset))
        .expect("built-in clock constants are in range")
}

pub fn default_timeline() -> TimelineConfig {
    let periods = DEFAULT_PERIODS
        .iter()
        .filter_map(|&((y, m, d), msg)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|start| TimePeriod::new(start, msg))
        })
        .collect();
    TimelineConfig::new(periods, default_clock(), WeekStart::Sunday)
}
