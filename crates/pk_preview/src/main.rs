//! Headless preview: render the demo scene for a number of frames and save
//! the converged image as a PNG.
//!
//! Usage: `pk_preview [width] [height] [frames] [output.png]`

use anyhow::{bail, Context, Result};
use pk_renderer::Renderer;
use std::path::PathBuf;
use std::time::Instant;

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 360;
const DEFAULT_FRAMES: u32 = 16;
const DEFAULT_OUTPUT: &str = "pktracer.png";

/// Command line options
#[derive(Debug, PartialEq)]
struct Options {
    width: u32,
    height: u32,
    frames: u32,
    output: PathBuf,
}

impl Options {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();

        let width = parse_arg(args.next(), "width", DEFAULT_WIDTH)?;
        let height = parse_arg(args.next(), "height", DEFAULT_HEIGHT)?;
        let frames = parse_arg(args.next(), "frames", DEFAULT_FRAMES)?;
        let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

        if width == 0 || height == 0 {
            bail!("Viewport must be at least 1x1, got {width}x{height}");
        }

        Ok(Self {
            width,
            height,
            frames,
            output,
        })
    }
}

fn parse_arg(arg: Option<String>, name: &str, default: u32) -> Result<u32> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid {name}: {value:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from_args(std::env::args().skip(1))?;
    log::info!(
        "Rendering {}x{} for {} frames",
        options.width,
        options.height,
        options.frames
    );

    let mut renderer = Renderer::new(options.width, options.height);
    renderer.initialize().context("Failed to load demo scene")?;
    renderer
        .on_resize(options.width, options.height)
        .context("Failed to size viewport")?;

    let start = Instant::now();
    for _ in 0..options.frames {
        let frame = renderer.frame_index();
        let frame_start = Instant::now();
        renderer.render().context("Render failed")?;
        log::info!("Frame {frame} done in {:.2?}", frame_start.elapsed());
    }
    log::info!("Rendered {} frames in {:.2?}", options.frames, start.elapsed());

    let image = renderer.image();
    image::save_buffer(
        &options.output,
        &image.to_rgba_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", options.output.display()))?;

    log::info!("Saved to {}", options.output.display());
    Ok(())
}
