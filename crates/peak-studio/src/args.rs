use std::path::PathBuf;

use clap::Parser;

/// Render layered peak gradients to SVG or PNG.
#[derive(Debug, Parser)]
#[command(name = "peak-studio", version)]
pub struct Args {
    /// Five comma-separated colors, back (a) to front (e).
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Master peak height, nominally 0-100.
    #[arg(long, allow_negative_numbers = true)]
    pub peak_height: Option<f64>,

    /// Master pointiness, nominally 0-100 (50 reproduces the built-in layers).
    #[arg(long, allow_negative_numbers = true)]
    pub pointiness: Option<f64>,

    /// JSON scene with explicit `colors`, `shapes` and `gradients`; replaces the built-in layers.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Fail on unknown or duplicate gradient references instead of rendering unfilled.
    #[arg(long)]
    pub strict: bool,

    /// Raster width in pixels (PNG output only).
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Raster height in pixels (PNG output only).
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Log filter in env_logger syntax, e.g. "debug" or "peak_engine=debug".
    #[arg(long)]
    pub log: Option<String>,

    /// Output file; `.svg` or `.png`.
    #[arg(short, long)]
    pub out: PathBuf,
}
