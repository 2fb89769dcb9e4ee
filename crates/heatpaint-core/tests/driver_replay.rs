// crates/heatpaint-core/tests/driver_replay.rs

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use heatpaint_core::calendar::iso_seconds;
use heatpaint_core::timeline::build_timeline;
use heatpaint_core::vcs::{CommitDates, Vcs};
use heatpaint_core::{
    CommitDriver, DriverState, Event, PaintClock, PaintError, PaintSettings, TimePeriod,
    TimelineConfig, WeekStart,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Orphan(String),
    UnstageAll,
    Stage(PathBuf),
    Commit {
        message: String,
        author: DateTime<FixedOffset>,
        committer: DateTime<FixedOffset>,
    },
}

/// In-memory stand-in for git that records every call.
#[derive(Default)]
struct RecordingVcs {
    not_a_repo: bool,
    fail_unstage: bool,
    fail_stage: Vec<PathBuf>,
    /// Fail the n-th commit (0-based, init commit included).
    fail_commit_at: Option<usize>,
    commits: usize,
    calls: Vec<Call>,
}

fn refused(what: &str) -> PaintError {
    PaintError::Vcs {
        command: what.to_string(),
        status: "exit status: 128".into(),
        stderr: "refused".into(),
    }
}

impl Vcs for RecordingVcs {
    fn is_repository(&self) -> bool {
        !self.not_a_repo
    }

    fn create_orphan_branch(&mut self, name: &str) -> heatpaint_core::Result<()> {
        self.calls.push(Call::Orphan(name.to_string()));
        Ok(())
    }

    fn unstage_all(&mut self) -> heatpaint_core::Result<()> {
        self.calls.push(Call::UnstageAll);
        if self.fail_unstage {
            return Err(refused("git rm"));
        }
        Ok(())
    }

    fn stage_path(&mut self, path: &Path) -> heatpaint_core::Result<()> {
        if self.fail_stage.iter().any(|p| p == path) {
            return Err(refused("git add"));
        }
        self.calls.push(Call::Stage(path.to_path_buf()));
        Ok(())
    }

    fn commit(&mut self, message: &str, dates: &CommitDates) -> heatpaint_core::Result<()> {
        let n = self.commits;
        self.commits += 1;
        if self.fail_commit_at == Some(n) {
            return Err(refused("git commit"));
        }
        self.calls.push(Call::Commit {
            message: message.to_string(),
            author: dates.author,
            committer: dates.committer,
        });
        Ok(())
    }
}

fn clock() -> PaintClock {
    PaintClock::new(12, FixedOffset::east_opt(3600).unwrap()).unwrap()
}

fn timeline(msg: &str) -> Vec<Event> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
    let cfg = TimelineConfig::new(vec![TimePeriod::new(start, msg)], clock(), WeekStart::Sunday);
    build_timeline(&cfg).unwrap()
}

fn commits(calls: &[Call]) -> Vec<&Call> {
    calls.iter().filter(|c| matches!(c, Call::Commit { .. })).collect()
}

#[test]
fn paints_one_commit_per_event_after_init() {
    let dir = tempfile::tempdir().unwrap();
    let events = timeline("I");
    let files = vec![
        PathBuf::from("README.md"),
        PathBuf::from("./pixels.txt"),
        PathBuf::from("src/lib.rs"),
    ];

    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), PaintSettings::default(), clock());
    let report = d.run(&events, &files).unwrap();

    assert_eq!(d.state(), &DriverState::Done);
    assert_eq!(report.commits, 15);
    assert_eq!(report.branch, "painted-history");
    assert_eq!(report.staged, vec![PathBuf::from("README.md"), PathBuf::from("src/lib.rs")]);
    assert!(report.skipped.is_empty());

    let calls = &d.vcs().calls;
    assert_eq!(calls[0], Call::Orphan("painted-history".into()));
    assert_eq!(calls[1], Call::UnstageAll);
    assert_eq!(calls[2], Call::Stage("README.md".into()));
    assert_eq!(calls[3], Call::Stage("src/lib.rs".into()));
    assert_eq!(calls[4], Call::Stage("pixels.txt".into()));

    let first = events[0].timestamp();
    let init_date = first - TimeDelta::days(1);
    assert_eq!(report.init_date, init_date);
    assert_eq!(
        calls[5],
        Call::Commit {
            message: "init".into(),
            author: init_date,
            committer: init_date,
        }
    );

    let painted = &commits(calls)[1..];
    assert_eq!(painted.len(), events.len());
    for (call, ev) in painted.iter().zip(&events) {
        match call {
            Call::Commit { message, author, committer } => {
                assert_eq!(message, "pixel");
                assert_eq!(*author, ev.timestamp());
                assert_eq!(*committer, ev.timestamp());
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    // Each painted commit is preceded by staging the log.
    for pair in calls[6..].chunks(2) {
        assert_eq!(pair[0], Call::Stage("pixels.txt".into()));
        assert!(matches!(pair[1], Call::Commit { .. }));
    }
}

#[test]
fn log_file_has_header_then_one_line_per_commit() {
    let dir = tempfile::tempdir().unwrap();
    let events = timeline("I'M");

    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), PaintSettings::default(), clock());
    d.run(&events, &[]).unwrap();

    let text = std::fs::read_to_string(dir.path().join("pixels.txt")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "pixel log");
    assert_eq!(lines.len(), events.len() + 1);
    assert_eq!(lines[1], "2015-01-04T12:00:00+01:00");
    for (line, ev) in lines[1..].iter().zip(&events) {
        assert_eq!(*line, iso_seconds(&ev.timestamp()));
    }
}

#[test]
fn stale_log_file_is_reset() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("pixels.txt"), "old\nstuff\n").unwrap();

    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), PaintSettings::default(), clock());
    d.run(&[], &[]).unwrap();

    let text = std::fs::read_to_string(dir.path().join("pixels.txt")).unwrap();
    assert_eq!(text, "pixel log\n");
}

#[test]
fn unstageable_files_are_skipped_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let vcs = RecordingVcs {
        fail_unstage: true,
        fail_stage: vec![PathBuf::from("weird\nname")],
        ..Default::default()
    };
    let files = vec![PathBuf::from("a.txt"), PathBuf::from("weird\nname"), PathBuf::from("b.txt")];

    let mut d = CommitDriver::new(vcs, dir.path(), PaintSettings::default(), clock());
    let report = d.run(&timeline("I"), &files).unwrap();

    assert_eq!(report.staged, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, PathBuf::from("weird\nname"));
    assert!(report.skipped[0].reason.contains("refused"));
    assert_eq!(report.commits, 15);
}

#[test]
fn empty_timeline_still_commits_init_at_current_time() {
    let dir = tempfile::tempdir().unwrap();
    let before = clock().now();

    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), PaintSettings::default(), clock());
    let report = d.run(&[], &[]).unwrap();

    let after = clock().now() + TimeDelta::seconds(1);
    assert_eq!(report.commits, 0);
    assert!(report.init_date >= before && report.init_date <= after);
    assert_eq!(report.init_date.offset().local_minus_utc(), 3600);

    let cs = commits(&d.vcs().calls);
    assert_eq!(cs.len(), 1);
    assert!(matches!(cs[0], Call::Commit { message, .. } if message == "init"));
}

#[test]
fn outside_a_repository_nothing_happens() {
    let dir = tempfile::tempdir().unwrap();
    let vcs = RecordingVcs {
        not_a_repo: true,
        ..Default::default()
    };

    let mut d = CommitDriver::new(vcs, dir.path(), PaintSettings::default(), clock());
    let err = d.run(&timeline("I"), &[PathBuf::from("a.txt")]).unwrap_err();

    assert!(matches!(err, PaintError::AbortedPrecondition(_)));
    assert!(matches!(d.state(), DriverState::Aborted(_)));
    assert!(d.vcs().calls.is_empty());
    assert!(!dir.path().join("pixels.txt").exists());
}

#[test]
fn commit_failure_aborts_without_rollback() {
    let dir = tempfile::tempdir().unwrap();
    let vcs = RecordingVcs {
        // init is commit 0, so the third painted commit fails
        fail_commit_at: Some(3),
        ..Default::default()
    };

    let mut d = CommitDriver::new(vcs, dir.path(), PaintSettings::default(), clock());
    let err = d.run(&timeline("I"), &[]).unwrap_err();

    assert!(matches!(err, PaintError::Vcs { .. }));
    match d.state() {
        DriverState::Aborted(reason) => assert!(reason.contains("git commit")),
        other => panic!("expected Aborted, got {other:?}"),
    }
    // init + two painted commits survive
    assert_eq!(commits(&d.vcs().calls).len(), 3);
    let text = std::fs::read_to_string(dir.path().join("pixels.txt")).unwrap();
    assert_eq!(text.lines().count(), 1 + 3);
}

#[test]
fn steps_must_run_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), PaintSettings::default(), clock());

    assert!(d.replay(&[]).is_err());
    assert!(d.initialize(&[]).is_err());
    assert_eq!(d.state(), &DriverState::NotStarted);

    d.create_branch().unwrap();
    assert_eq!(d.state(), &DriverState::BranchCreated);
    assert!(d.create_branch().is_err());
    d.stage_files(&[]).unwrap();
    assert_eq!(d.state(), &DriverState::FilesStaged);
    d.initialize(&[]).unwrap();
    assert_eq!(d.state(), &DriverState::Initialized);
    d.replay(&timeline("I")).unwrap();
    assert_eq!(d.state(), &DriverState::Replaying(15));
}

#[test]
fn custom_settings_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PaintSettings {
        branch: "art".into(),
        log_file: "cells.log".into(),
        ..Default::default()
    };
    let files = vec![PathBuf::from("cells.log"), PathBuf::from("pixels.txt")];

    let mut d = CommitDriver::new(RecordingVcs::default(), dir.path(), settings, clock());
    let report = d.run(&timeline("I"), &files).unwrap();

    assert_eq!(report.branch, "art");
    assert_eq!(report.staged, vec![PathBuf::from("pixels.txt")]);
    assert_eq!(d.vcs().calls[0], Call::Orphan("art".into()));
    assert!(dir.path().join("cells.log").exists());
}
