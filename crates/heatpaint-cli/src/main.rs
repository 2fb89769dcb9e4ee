// crates/heatpaint-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "heatpaint")]
#[command(about = "Paint pixel-art messages into a git contribution calendar", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Paint the timeline as dated commits on a new orphan branch (default)
    Paint(cmd::paint::PaintArgs),

    /// Show how a message rasterizes with the pixel font
    Preview(cmd::preview::PreviewArgs),

    /// Build the timeline and report it without touching git
    Plan(cmd::plan::PlanArgs),
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        None => cmd::paint::run(cmd::paint::PaintArgs::default()),
        Some(Commands::Paint(args)) => cmd::paint::run(args),
        Some(Commands::Preview(args)) => cmd::preview::run(args),
        Some(Commands::Plan(args)) => cmd::plan::run(args),
    }
}
