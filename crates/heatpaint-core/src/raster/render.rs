// crates/heatpaint-core/src/raster/render.rs

use crate::error::Result;
use crate::glyph::{glyph, GLYPH_HEIGHT};
use crate::raster::bitmap::Bitmap;

/// Rasterize `message` with the pixel font.
///
/// Every glyph is followed by one off column, the last one included, so the
/// width is the sum of `glyph width + 1` over the message.
pub fn render(message: &str) -> Result<Bitmap> {
    if message.is_empty() {
        return Ok(Bitmap::empty());
    }

    let mut rows: Vec<Vec<bool>> = vec![Vec::new(); GLYPH_HEIGHT];
    for ch in message.chars() {
        let g = glyph(ch)?;
        for (r, row) in rows.iter_mut().enumerate() {
            row.extend((0..g.width()).map(|c| g.is_on(r, c)));
            row.push(false); // spacer
        }
    }

    Ok(Bitmap::from_rows(rows))
}
