// crates/heatpaint-cli/src/cmd/preview.rs

use clap::Args;
use heatpaint_core::glyph::supported_chars;
use heatpaint_core::raster::render;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Message to rasterize
    #[arg(long)]
    pub message: String,

    /// Character drawn for painted cells
    #[arg(long, default_value_t = '#')]
    pub on: char,

    /// Character drawn for empty cells
    #[arg(long, default_value_t = '.')]
    pub off: char,
}

pub fn run(args: PreviewArgs) -> anyhow::Result<()> {
    let bitmap = match render(&args.message) {
        Ok(b) => b,
        Err(e) => {
            let alphabet: String = supported_chars().collect();
            anyhow::bail!("{e}; supported characters: {alphabet:?}");
        }
    };

    eprintln!("message         = {:?}", args.message);
    eprintln!("weeks           = {}", bitmap.width());
    eprintln!("commits         = {}", bitmap.on_count());
    print!("{}", bitmap.to_ascii(args.on, args.off));
    Ok(())
}
