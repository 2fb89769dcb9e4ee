// crates/heatpaint-cli/src/cmd/paint.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use heatpaint_core::calendar::iso_seconds;
use heatpaint_core::timeline::{build_timeline, TimelineSummary};
use heatpaint_core::validate::validate_timeline;
use heatpaint_core::vcs::{GitCli, Vcs};
use heatpaint_core::{CommitDriver, PaintError, PaintSettings};

use crate::cmd::plan::print_periods;
use crate::io::{inventory, timeline_file};

#[derive(Args, Debug, Default)]
pub struct PaintArgs {
    /// Repository root (default: current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Timeline table (.hpt); the built-in table is used when omitted
    #[arg(long)]
    pub timeline: Option<PathBuf>,

    /// Name of the orphan branch to paint on
    #[arg(long)]
    pub branch: Option<String>,

    /// Pixel log file name, relative to the repository root
    #[arg(long)]
    pub log_file: Option<String>,
}

pub fn run(args: PaintArgs) -> anyhow::Result<()> {
    let root = args.repo.unwrap_or_else(|| PathBuf::from("."));
    let git = GitCli::new(&root);

    if !git.is_repository() {
        eprintln!("error: heatpaint must run inside an existing git repository ({})", root.display());
        eprintln!("initialize one first with: git init");
        return Ok(());
    }

    let cfg = timeline_file::load_or_default(args.timeline.as_deref())?;
    validate_timeline(&cfg).context("validate timeline")?;
    for i in cfg.out_of_order() {
        tracing::warn!(
            period = i,
            start = %cfg.periods[i].start,
            "period starts before the one declared above it"
        );
    }

    print_periods(&cfg)?;
    let events = build_timeline(&cfg).context("build timeline")?;

    eprintln!("--- inventory ---");
    let files = inventory::list_files(&root)?;
    eprintln!("files           = {}", files.len());

    let mut settings = PaintSettings::default();
    if let Some(b) = args.branch {
        settings.branch = b;
    }
    if let Some(l) = args.log_file {
        settings.log_file = l;
    }

    eprintln!("--- paint ---");
    eprintln!("branch          = {} (orphan)", settings.branch);
    let summary = TimelineSummary::of(&events);
    eprintln!("commits         = {}", summary.count);
    if let (Some(first), Some(last)) = (summary.first, summary.last) {
        eprintln!("span            = {} .. {}", iso_seconds(&first), iso_seconds(&last));
    }

    let mut driver = CommitDriver::new(git, &root, settings, cfg.clock);
    let report = match driver.run(&events, &files) {
        Ok(r) => r,
        Err(PaintError::AbortedPrecondition(msg)) => {
            eprintln!("error: {msg}");
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("paint aborted in state {}", driver.state()));
        }
    };

    for s in &report.skipped {
        eprintln!("skipped         = {} ({})", s.path.display(), s.reason);
    }

    println!();
    println!("Done: {} commits created on '{}'.", report.commits, report.branch);
    println!("init commit     = {}", iso_seconds(&report.init_date));
    println!("staged files    = {}", report.staged.len());
    println!("skipped files   = {}", report.skipped.len());
    println!();
    println!("To replace your main branch with the painted history:");
    println!("  git branch -D main");
    println!("  git branch -m {} main", report.branch);
    println!();
    println!("To force-push to the remote (WARNING: overwrites remote history):");
    println!("  git push -f origin main");

    Ok(())
}
