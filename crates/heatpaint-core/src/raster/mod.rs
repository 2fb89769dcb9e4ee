// crates/heatpaint-core/src/raster/mod.rs

pub mod bitmap;
pub mod render;

pub use bitmap::Bitmap;
pub use render::render;
