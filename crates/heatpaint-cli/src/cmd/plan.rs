// crates/heatpaint-cli/src/cmd/plan.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use heatpaint_core::calendar::clock::format_offset;
use heatpaint_core::calendar::iso_seconds;
use heatpaint_core::raster::render;
use heatpaint_core::timeline::format as timeline_format;
use heatpaint_core::timeline::{build_timeline, TimelineSummary};
use heatpaint_core::TimelineConfig;

use crate::io::timeline_file;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Timeline table (.hpt); the built-in table is used when omitted
    #[arg(long)]
    pub timeline: Option<PathBuf>,

    /// Print every event, one ISO-8601 timestamp per line
    #[arg(long, default_value_t = false)]
    pub events: bool,

    /// Print the effective timeline table and exit
    #[arg(long, default_value_t = false)]
    pub dump: bool,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = timeline_file::load_or_default(args.timeline.as_deref())?;

    if args.dump {
        print!("{}", timeline_format::to_text(&cfg));
        return Ok(());
    }

    print_periods(&cfg)?;
    let events = build_timeline(&cfg).context("build timeline")?;
    let s = TimelineSummary::of(&events);

    eprintln!("--- plan ---");
    eprintln!("events          = {}", s.count);
    if let (Some(first), Some(last)) = (s.first, s.last) {
        eprintln!("first           = {}", iso_seconds(&first));
        eprintln!("last            = {}", iso_seconds(&last));
    }
    for (label, n) in &s.per_label {
        eprintln!("label           = {:?} x{}", label, n);
    }

    if args.events {
        for e in &events {
            println!("{} {}", iso_seconds(&e.timestamp()), e.label());
        }
    }

    Ok(())
}

/// One line per period: where it starts and how many weeks it spans.
pub fn print_periods(cfg: &TimelineConfig) -> anyhow::Result<()> {
    eprintln!("--- timeline ---");
    eprintln!("hour            = {:02}:00", cfg.clock.hour());
    eprintln!("offset          = {}", format_offset(cfg.clock.offset()));
    eprintln!("week_start      = {}", cfg.week_start);
    for p in &cfg.periods {
        let bm = render(&p.message).with_context(|| format!("render {:?}", p.message))?;
        eprintln!(
            "period          = {} {:?} ({} weeks, {} cells)",
            p.start,
            p.message,
            bm.width(),
            bm.on_count()
        );
    }
    Ok(())
}
