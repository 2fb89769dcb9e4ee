// crates/heatpaint-core/src/timeline/format.rs

use chrono::NaiveDate;

use crate::calendar::clock::{format_offset, parse_offset, PaintClock};
use crate::calendar::week::WeekStart;
use crate::error::{PaintError, Result};
use crate::timeline::defaults::{default_clock, DEFAULT_HOUR};
use crate::timeline::period::{TimePeriod, TimelineConfig};

/// Plain-text timeline table.
///
/// ```text
/// # comment
/// hour = 12
/// offset = +01:00
/// week_start = sunday
/// 2015-01-04 I'M FREELANCE
/// 2020-01-05 I'M CTO @ WEGROW
/// ```
///
/// Directives may appear anywhere; absent ones keep the built-in defaults.
/// A period line is a `YYYY-MM-DD` date, one separator character, then the
/// message verbatim up to the end of the line. Leading spaces in the message
/// are significant: each one shifts the art right by a blank glyph.
pub fn parse(text: &str) -> Result<TimelineConfig> {
    let mut hour = DEFAULT_HOUR;
    let mut offset = default_clock().offset();
    let mut week_start = WeekStart::default();
    let mut periods = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = directive(trimmed) {
            match key {
                "hour" => {
                    hour = value
                        .parse::<u32>()
                        .ok()
                        .filter(|h| *h < 24)
                        .ok_or_else(|| bad(line_no, format!("hour must be 0..=23, got {value:?}")))?;
                }
                "offset" => {
                    offset = parse_offset(value)
                        .ok_or_else(|| bad(line_no, format!("offset must be ±HH:MM, got {value:?}")))?;
                }
                "week_start" => {
                    week_start = value.parse().map_err(|e: String| bad(line_no, e))?;
                }
                other => return Err(bad(line_no, format!("unknown directive {other:?}"))),
            }
            continue;
        }

        let body = raw.strip_suffix('\r').unwrap_or(raw).trim_start();
        let (date, message) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
        let start = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| bad(line_no, format!("bad date {date:?}: {e}")))?;
        if message.is_empty() {
            return Err(bad(line_no, "missing message after date".into()));
        }
        periods.push(TimePeriod::new(start, message));
    }

    let clock = PaintClock::new(hour, offset)
        .ok_or_else(|| bad(0, format!("invalid clock hour {hour}")))?;
    Ok(TimelineConfig::new(periods, clock, week_start))
}

/// Serialize back to the text form accepted by [`parse`].
pub fn to_text(cfg: &TimelineConfig) -> String {
    let mut s = String::new();
    s.push_str(&format!("hour = {}\n", cfg.clock.hour()));
    s.push_str(&format!("offset = {}\n", format_offset(cfg.clock.offset())));
    s.push_str(&format!("week_start = {}\n", cfg.week_start));
    for p in &cfg.periods {
        s.push_str(&format!("{} {}\n", p.start.format("%Y-%m-%d"), p.message));
    }
    s
}

fn directive(line: &str) -> Option<(&str, &str)> {
    let (k, v) = line.split_once('=')?;
    let k = k.trim();
    if k.is_empty() || !k.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
        return None;
    }
    Some((k, v.trim()))
}

fn bad(line: usize, reason: String) -> PaintError {
    PaintError::TimelineFormat { line, reason }
}
