// crates/heatpaint-core/src/raster/bitmap.rs

use crate::glyph::GLYPH_HEIGHT;

/// Fixed-height on/off grid. Row index is a weekday offset, column index a week offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
}

impl Bitmap {
    pub fn empty() -> Self {
        Self {
            rows: vec![Vec::new(); GLYPH_HEIGHT],
        }
    }

    /// Build from raw rows. All rows must share one width.
    pub(crate) fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        debug_assert_eq!(rows.len(), GLYPH_HEIGHT);
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { rows }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn on_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&on| on).count()
    }

    /// Row-major iteration over on cells as `(row, col)`.
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Row strings, one per line, using `on` / `off` as cell characters.
    pub fn to_ascii(&self, on: char, off: char) -> String {
        let mut s = String::with_capacity(self.height() * (self.width() + 1));
        for row in &self.rows {
            for &cell in row {
                s.push(if cell { on } else { off });
            }
            s.push('\n');
        }
        s
    }
}
