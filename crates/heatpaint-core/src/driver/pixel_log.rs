// crates/heatpaint-core/src/driver/pixel_log.rs

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::calendar::iso_seconds;
use crate::error::Result;

/// Append-only text log at the repository root: a header line, then one
/// timestamp per painted commit. Each append gives the next commit a change to record.
#[derive(Clone, Debug)]
pub struct PixelLog {
    path: PathBuf,
}

impl PixelLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Truncate and write the header.
    pub fn reset(&self, header: &str) -> Result<()> {
        std::fs::write(&self.path, format!("{header}\n"))?;
        Ok(())
    }

    pub fn append(&self, ts: &DateTime<FixedOffset>) -> Result<()> {
        let mut f = OpenOptions::new().append(true).create(true).open(&self.path)?;
        writeln!(f, "{}", iso_seconds(ts))?;
        Ok(())
    }
}
