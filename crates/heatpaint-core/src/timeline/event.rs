// crates/heatpaint-core/src/timeline/event.rs

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

/// One painted calendar cell: becomes exactly one commit.
///
/// `label` is the message that produced the cell. It is carried for reporting
/// only and never influences history. Events of one period share the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    timestamp: DateTime<FixedOffset>,
    label: Arc<str>,
}

impl Event {
    pub fn new(timestamp: DateTime<FixedOffset>, label: Arc<str>) -> Self {
        Self { timestamp, label }
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}
