// crates/heatpaint-cli/src/io/mod.rs

pub mod inventory;
pub mod timeline_file;
