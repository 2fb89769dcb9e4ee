// crates/heatpaint-cli/src/cmd/mod.rs

pub mod paint;
pub mod plan;
pub mod preview;
