// crates/heatpaint-core/src/timeline/period.rs

use chrono::NaiveDate;

use crate::calendar::clock::PaintClock;
use crate::calendar::week::WeekStart;

/// A message painted starting at the week beginning on `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimePeriod {
    pub start: NaiveDate,
    pub message: String,
}

impl TimePeriod {
    pub fn new(start: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            start,
            message: message.into(),
        }
    }
}

/// Everything the timeline merger needs. Periods are evaluated in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineConfig {
    pub periods: Vec<TimePeriod>,
    pub clock: PaintClock,
    pub week_start: WeekStart,
}

impl TimelineConfig {
    pub fn new(periods: Vec<TimePeriod>, clock: PaintClock, week_start: WeekStart) -> Self {
        Self {
            periods,
            clock,
            week_start,
        }
    }

    /// Indices `i` where period `i` starts before period `i - 1`.
    pub fn out_of_order(&self) -> Vec<usize> {
        self.periods
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[1].start < w[0].start)
            .map(|(i, _)| i + 1)
            .collect()
    }
}
