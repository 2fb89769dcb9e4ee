// crates/heatpaint-core/src/timeline/mod.rs

pub mod defaults;
pub mod event;
pub mod format;
pub mod merge;
pub mod period;

pub use event::Event;
pub use merge::{build_timeline, TimelineSummary};
pub use period::{TimePeriod, TimelineConfig};
