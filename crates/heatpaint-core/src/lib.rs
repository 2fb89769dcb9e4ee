pub mod error;
pub mod validate;

pub mod glyph;
pub mod raster;
pub mod calendar;
pub mod timeline;
pub mod vcs;
pub mod driver;

pub use crate::calendar::clock::PaintClock;
pub use crate::calendar::week::WeekStart;
pub use crate::driver::{CommitDriver, DriverReport, DriverState, PaintSettings};
pub use crate::error::{PaintError, Result};
pub use crate::raster::bitmap::Bitmap;
pub use crate::timeline::event::Event;
pub use crate::timeline::period::{TimePeriod, TimelineConfig};
