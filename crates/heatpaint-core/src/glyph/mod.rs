// crates/heatpaint-core/src/glyph/mod.rs

pub mod font;

use crate::error::{PaintError, Result};

/// Every glyph, and therefore every rendered bitmap, is this many rows tall.
/// One row per weekday of the contribution calendar.
pub const GLYPH_HEIGHT: usize = 7;

pub const ON: u8 = b'#';

/// One character of the pixel font: 7 rows of `#` (on) and `.` (off).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.rows[row].as_bytes().get(col) == Some(&ON)
    }

    pub fn on_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.bytes().filter(|&b| b == ON).count())
            .sum()
    }
}

/// Look up the glyph for `ch`.
pub fn glyph(ch: char) -> Result<&'static Glyph> {
    font::FONT
        .iter()
        .find(|g| g.ch == ch)
        .ok_or(PaintError::UnsupportedCharacter(ch))
}

/// All characters the font can draw, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    font::FONT.iter().map(|g| g.ch)
}

#[inline]
pub fn is_supported(ch: char) -> bool {
    font::FONT.iter().any(|g| g.ch == ch)
}
