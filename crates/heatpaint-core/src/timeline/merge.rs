// crates/heatpaint-core/src/timeline/merge.rs

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::calendar::mapper::events_for;
use crate::error::Result;
use crate::raster::render::render;
use crate::timeline::event::Event;
use crate::timeline::period::TimelineConfig;

/// Paint every period and merge the results into one chronological timeline.
///
/// The sort is stable: equal timestamps keep period declaration order, then
/// the row-major order in which cells were emitted.
pub fn build_timeline(cfg: &TimelineConfig) -> Result<Vec<Event>> {
    let mut all = Vec::new();
    for p in &cfg.periods {
        let bitmap = render(&p.message)?;
        let start = cfg.clock.anchor(p.start);
        let events = events_for(&bitmap, start, &p.message, cfg.week_start)?;
        tracing::debug!(
            start = %p.start,
            message = %p.message,
            width = bitmap.width(),
            events = events.len(),
            "painted period"
        );
        all.extend(events);
    }

    all.sort_by_key(|e| e.timestamp());
    Ok(all)
}

/// Counts and bounds of a timeline, for reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineSummary {
    pub count: usize,
    pub first: Option<DateTime<FixedOffset>>,
    pub last: Option<DateTime<FixedOffset>>,
    pub per_label: BTreeMap<String, usize>,
}

impl TimelineSummary {
    pub fn of(events: &[Event]) -> Self {
        let mut per_label = BTreeMap::new();
        for e in events {
            *per_label.entry(e.label().to_string()).or_insert(0) += 1;
        }
        Self {
            count: events.len(),
            first: events.iter().map(Event::timestamp).min(),
            last: events.iter().map(Event::timestamp).max(),
            per_label,
        }
    }
}
