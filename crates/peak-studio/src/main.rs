mod args;
mod scene;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use peak_engine::compose::{Composer, ReferencePolicy};
use peak_engine::layers::MasterControls;
use peak_engine::logging::{LoggingConfig, init_logging};
use peak_engine::paint::ColorPalette;
use peak_engine::scene::DrawList;

use crate::args::Args;
use crate::scene::SceneFile;

/// Dark-to-light greys used when no colors are given.
const DEFAULT_COLORS: [&str; 5] = ["#1a1a1a", "#404040", "#737373", "#a6a6a6", "#d9d9d9"];

enum OutputFormat {
    Svg,
    Png,
}

fn output_format(path: &Path) -> Result<OutputFormat> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("svg") => Ok(OutputFormat::Svg),
        Some("png") => Ok(OutputFormat::Png),
        _ => bail!("unsupported output {}: expected a .svg or .png file", path.display()),
    }
}

fn compose(args: &Args) -> Result<DrawList> {
    let policy = if args.strict { ReferencePolicy::Strict } else { ReferencePolicy::Lenient };
    let composer = Composer::new().with_policy(policy);

    let cli_palette = match &args.colors {
        Some(colors) => ColorPalette::from_slice(colors.as_slice()).context("--colors")?,
        None => ColorPalette::from(DEFAULT_COLORS),
    };

    let list = match &args.scene {
        Some(path) => {
            if args.peak_height.is_some() || args.pointiness.is_some() {
                log::warn!("master controls are ignored when rendering an explicit scene");
            }
            let scene = SceneFile::load(path)?;
            let palette = match scene.palette() {
                Some(palette) => palette?,
                None => cli_palette,
            };
            log::info!("rendering {} layers from {}", scene.shapes.len(), path.display());
            composer.compose(&palette, &scene.shapes, &scene.gradients)?
        }
        None => {
            let masters = MasterControls { peak_height: args.peak_height, pointiness: args.pointiness };
            log::info!(
                "rendering built-in layers (peak height {}, pointiness {})",
                masters.peak_height(),
                masters.pointiness()
            );
            composer.compose_preset(&cli_palette, masters)?
        }
    };

    Ok(list)
}

fn run(args: Args) -> Result<()> {
    let format = output_format(&args.out)?;
    let list = compose(&args)?;
    let svg = peak_svg::render_svg(&list);

    match format {
        OutputFormat::Svg => {
            std::fs::write(&args.out, svg).with_context(|| format!("writing {}", args.out.display()))?;
        }
        OutputFormat::Png => {
            let image = peak_svg::rasterize(&svg, args.width, args.height).context("rasterizing")?;
            image.save_png(&args.out).with_context(|| format!("writing {}", args.out.display()))?;
        }
    }

    log::info!("wrote {}", args.out.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    run(args)
}
