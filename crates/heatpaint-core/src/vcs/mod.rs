// crates/heatpaint-core/src/vcs/mod.rs

pub mod git;

use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::error::Result;

pub use git::GitCli;

/// Explicit author/committer dates for one commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommitDates {
    pub author: DateTime<FixedOffset>,
    pub committer: DateTime<FixedOffset>,
}

impl CommitDates {
    /// Author and committer date both forced to `ts`.
    #[inline]
    pub fn both(ts: DateTime<FixedOffset>) -> Self {
        Self {
            author: ts,
            committer: ts,
        }
    }
}

/// The handful of version-control operations the commit driver performs.
///
/// Paths are relative to the repository root.
pub trait Vcs {
    fn is_repository(&self) -> bool;

    /// New branch with no history, keeping the working tree.
    fn create_orphan_branch(&mut self, name: &str) -> Result<()>;

    /// Drop everything from the index, leave the working tree alone.
    fn unstage_all(&mut self) -> Result<()>;

    fn stage_path(&mut self, path: &Path) -> Result<()>;

    fn commit(&mut self, message: &str, dates: &CommitDates) -> Result<()>;
}
