// crates/heatpaint-core/src/driver/mod.rs

pub mod pixel_log;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::calendar::clock::PaintClock;
use crate::error::{PaintError, Result};
use crate::timeline::event::Event;
use crate::vcs::{CommitDates, Vcs};

use pixel_log::PixelLog;

/// Names and knobs of the paint run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintSettings {
    pub branch: String,
    /// Relative to the repository root.
    pub log_file: String,
    pub log_header: String,
    pub init_message: String,
    pub pixel_message: String,
    /// Report progress every N painted commits (0 disables).
    pub progress_every: usize,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            branch: "painted-history".into(),
            log_file: "pixels.txt".into(),
            log_header: "pixel log".into(),
            init_message: "init".into(),
            pixel_message: "pixel".into(),
            progress_every: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    BranchCreated,
    FilesStaged,
    Initialized,
    /// Number of painted commits created so far.
    Replaying(usize),
    Done,
    Aborted(String),
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::NotStarted => f.write_str("not-started"),
            DriverState::BranchCreated => f.write_str("branch-created"),
            DriverState::FilesStaged => f.write_str("files-staged"),
            DriverState::Initialized => f.write_str("initialized"),
            DriverState::Replaying(i) => write!(f, "replaying({i})"),
            DriverState::Done => f.write_str("done"),
            DriverState::Aborted(r) => write!(f, "aborted: {r}"),
        }
    }
}

/// A file the driver could not stage, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverReport {
    pub branch: String,
    pub init_date: DateTime<FixedOffset>,
    /// Painted commits, not counting the init commit.
    pub commits: usize,
    pub staged: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Replays a timeline as dated commits on a fresh orphan branch.
///
/// The driver never touches the primary branch and never rolls back: on a
/// fatal error the orphan branch is left as far as it got.
pub struct CommitDriver<V: Vcs> {
    vcs: V,
    log: PixelLog,
    settings: PaintSettings,
    clock: PaintClock,
    state: DriverState,
    staged: Vec<PathBuf>,
    skipped: Vec<SkippedFile>,
}

impl<V: Vcs> CommitDriver<V> {
    pub fn new(vcs: V, root: &Path, settings: PaintSettings, clock: PaintClock) -> Self {
        Self {
            vcs,
            log: PixelLog::new(root.join(&settings.log_file)),
            settings,
            clock,
            state: DriverState::NotStarted,
            staged: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Whole workflow: branch, stage `files`, init commit, one commit per event.
    pub fn run(&mut self, timeline: &[Event], files: &[PathBuf]) -> Result<DriverReport> {
        if !self.vcs.is_repository() {
            let reason = "not inside an initialized git repository".to_string();
            self.state = DriverState::Aborted(reason.clone());
            return Err(PaintError::AbortedPrecondition(reason));
        }

        let r = self.create_branch();
        self.guard(r)?;
        let r = self.stage_files(files);
        self.guard(r)?;
        let r = self.initialize(timeline);
        let init_date = self.guard(r)?;
        let r = self.replay(timeline);
        self.guard(r)?;

        self.state = DriverState::Done;
        tracing::info!(branch = %self.settings.branch, commits = timeline.len(), "painting done");

        Ok(DriverReport {
            branch: self.settings.branch.clone(),
            init_date,
            commits: timeline.len(),
            staged: std::mem::take(&mut self.staged),
            skipped: std::mem::take(&mut self.skipped),
        })
    }

    fn guard<T>(&mut self, r: Result<T>) -> Result<T> {
        if let Err(e) = &r {
            tracing::error!(state = %self.state, error = %e, "aborting");
            self.state = DriverState::Aborted(e.to_string());
        }
        r
    }

    fn expect_state(&self, want: &DriverState, op: &str) -> Result<()> {
        if &self.state != want {
            return Err(PaintError::AbortedPrecondition(format!(
                "{op} needs state {want}, driver is {}",
                self.state
            )));
        }
        Ok(())
    }

    /// NotStarted -> BranchCreated.
    pub fn create_branch(&mut self) -> Result<()> {
        self.expect_state(&DriverState::NotStarted, "create_branch")?;
        tracing::info!(branch = %self.settings.branch, "creating orphan branch");
        self.vcs.create_orphan_branch(&self.settings.branch)?;
        self.state = DriverState::BranchCreated;
        Ok(())
    }

    /// BranchCreated -> FilesStaged. Git failures here are not fatal:
    /// per-file problems are recorded in the report and the run continues.
    pub fn stage_files(&mut self, files: &[PathBuf]) -> Result<()> {
        self.expect_state(&DriverState::BranchCreated, "stage_files")?;
        if let Err(e) = self.vcs.unstage_all() {
            tracing::warn!(error = %e, "unstage failed, continuing");
        }

        let log_rel = Path::new(&self.settings.log_file);
        for path in files {
            let rel = path.strip_prefix(".").unwrap_or(path);
            if rel == log_rel {
                continue;
            }
            match self.vcs.stage_path(rel) {
                Ok(()) => self.staged.push(rel.to_path_buf()),
                Err(e) => {
                    tracing::warn!(path = %rel.display(), error = %e, "skipping file");
                    self.skipped.push(SkippedFile {
                        path: rel.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(staged = self.staged.len(), skipped = self.skipped.len(), "files staged");
        self.state = DriverState::FilesStaged;
        Ok(())
    }

    /// FilesStaged -> Initialized. The init commit sits one day before the
    /// earliest event, or at the current time for an empty timeline.
    pub fn initialize(&mut self, timeline: &[Event]) -> Result<DateTime<FixedOffset>> {
        self.expect_state(&DriverState::FilesStaged, "initialize")?;

        let init_date = match timeline.iter().map(Event::timestamp).min() {
            Some(first) => first - TimeDelta::days(1),
            None => self.clock.now(),
        };

        self.log.reset(&self.settings.log_header)?;
        self.vcs.stage_path(Path::new(&self.settings.log_file))?;
        self.vcs
            .commit(&self.settings.init_message, &CommitDates::both(init_date))?;

        tracing::info!(date = %init_date, "init commit");
        self.state = DriverState::Initialized;
        Ok(init_date)
    }

    /// Initialized -> Replaying(N). One commit per event, in timeline order.
    pub fn replay(&mut self, timeline: &[Event]) -> Result<()> {
        self.expect_state(&DriverState::Initialized, "replay")?;

        let total = timeline.len();
        let log_rel = PathBuf::from(&self.settings.log_file);
        self.state = DriverState::Replaying(0);

        for (i, ev) in timeline.iter().enumerate() {
            let ts = ev.timestamp();
            self.log.append(&ts)?;
            self.vcs.stage_path(&log_rel)?;
            self.vcs
                .commit(&self.settings.pixel_message, &CommitDates::both(ts))?;

            let done = i + 1;
            self.state = DriverState::Replaying(done);
            tracing::debug!(date = %ts, label = ev.label(), "pixel");
            if self.settings.progress_every > 0 && done % self.settings.progress_every == 0 {
                tracing::info!("{done}/{total} commits created");
            }
        }

        Ok(())
    }
}
