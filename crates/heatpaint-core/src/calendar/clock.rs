// crates/heatpaint-core/src/calendar/clock.rs

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

/// Fixed time of day and UTC offset applied to every painted date.
///
/// Painting at midday with a fixed offset keeps DST shifts and midnight
/// rollover from moving a commit onto the neighbouring calendar cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaintClock {
    time: NaiveTime,
    offset: FixedOffset,
}

impl PaintClock {
    /// `None` when `hour` is not a valid hour of the day.
    pub fn new(hour: u32, offset: FixedOffset) -> Option<Self> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(Self { time, offset })
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    #[inline]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// `date` at the clock's hour, in the clock's offset.
    pub fn anchor(&self, date: NaiveDate) -> DateTime<FixedOffset> {
        let local = date.and_time(self.time);
        let utc = local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, self.offset)
    }

    /// Current wall time in the clock's offset, truncated to whole seconds.
    pub fn now(&self) -> DateTime<FixedOffset> {
        let now = Utc::now().with_timezone(&self.offset);
        let nanos = i64::from(now.nanosecond());
        now - TimeDelta::nanoseconds(nanos)
    }
}

/// Parse `+HH:MM` / `-HH:MM`.
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hh, mm) = rest.split_once(':')?;
    let two_digits = |f: &str| f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hh) || !two_digits(mm) {
        return None;
    }
    let hh: i32 = hh.parse().ok()?;
    let mm: i32 = mm.parse().ok()?;
    if mm >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hh * 3600 + mm * 60))
}

/// Inverse of [`parse_offset`].
pub fn format_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.abs();
    format!("{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
}
