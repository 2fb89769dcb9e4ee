// crates/heatpaint-cli/src/io/timeline_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use heatpaint_core::timeline::defaults::default_timeline;
use heatpaint_core::timeline::format as timeline_format;
use heatpaint_core::TimelineConfig;

/// Load a timeline table, or the built-in one when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<TimelineConfig> {
    match path {
        Some(p) => load(p),
        None => Ok(default_timeline()),
    }
}

pub fn load(path: &Path) -> Result<TimelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read timeline {}", path.display()))?;
    let cfg = timeline_format::parse(&text)
        .with_context(|| format!("parse timeline {}", path.display()))?;
    Ok(cfg)
}
