use chrono::Datelike;

use crate::error::{PaintError, Result};
use crate::glyph::glyph;
use crate::timeline::period::TimelineConfig;

/// Fail fast, before anything touches the repository.
pub fn validate_timeline(cfg: &TimelineConfig) -> Result<()> {
    for p in &cfg.periods {
        // Every character must exist in the font.
        for ch in p.message.chars() {
            glyph(ch)?;
        }

        // Columns only line up with calendar weeks if the period starts on the first weekday.
        let actual = p.start.weekday();
        let expected = cfg.week_start.weekday();
        if actual != expected {
            return Err(PaintError::MisalignedStartDate {
                date: p.start,
                actual,
                expected,
            });
        }
    }

    Ok(())
}
