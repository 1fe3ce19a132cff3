use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use easel_engine::coords::Viewport;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::surface::SvgSurface;
use easel_engine::{Runtime, RuntimeConfig};

mod sketches;

const USAGE: &str = "usage: easel-studio <sketch> [out.png] [frames]";

/// Command-line options.
#[derive(Debug)]
struct Args {
    sketch: String,
    out: PathBuf,
    frames: u64,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let sketch = args
            .next()
            .ok_or_else(|| anyhow!("{USAGE}\nsketches: {}", sketches::NAMES.join(", ")))?;
        let out = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("{sketch}.png")));
        let frames = match args.next() {
            Some(n) => n.parse().with_context(|| format!("invalid frame count `{n}`"))?,
            None => 1,
        };
        if args.next().is_some() {
            bail!("{USAGE}");
        }
        Ok(Self { sketch, out, frames })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = Args::parse(std::env::args().skip(1))?;
    let mut sketch = sketches::by_name(&args.sketch)
        .ok_or_else(|| anyhow!("unknown sketch `{}` (try: {})", args.sketch, sketches::NAMES.join(", ")))?;

    let size = Viewport::new(200.0, 200.0);
    let config = RuntimeConfig {
        title: args.sketch.clone(),
        size,
        frames: args.frames,
        ..RuntimeConfig::default()
    };

    let surface = Runtime::run(config, SvgSurface::new(size), sketch.as_mut())?.into_surface();
    let svg = surface.finish();

    let svg_path = args.out.with_extension("svg");
    std::fs::write(&svg_path, &svg)
        .with_context(|| format!("failed to write {}", svg_path.display()))?;
    rasterize(&svg, &args.out)?;

    let size = surface.size();
    log::info!(
        "wrote {} and {} ({}x{})",
        svg_path.display(),
        args.out.display(),
        size.width,
        size.height
    );
    Ok(())
}

/// Renders an SVG document to a PNG file.
fn rasterize(svg: &str, out: &Path) -> Result<()> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default())
        .context("generated SVG did not parse")?;

    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate {}x{} pixmap", size.width(), size.height()))?;

    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_fill_in_output_and_frames() {
        let a = args(&["star"]).unwrap();
        assert_eq!(a.out, PathBuf::from("star.png"));
        assert_eq!(a.frames, 1);
    }

    #[test]
    fn explicit_arguments() {
        let a = args(&["curve", "out/c.png", "12"]).unwrap();
        assert_eq!(a.sketch, "curve");
        assert_eq!(a.out, PathBuf::from("out/c.png"));
        assert_eq!(a.frames, 12);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(args(&[]).is_err());
        assert!(args(&["star", "s.png", "many"]).is_err());
        assert!(args(&["star", "s.png", "1", "extra"]).is_err());
    }

    #[test]
    fn every_sketch_renders_to_svg() {
        for name in sketches::NAMES {
            let mut sketch = sketches::by_name(name).unwrap();
            let size = Viewport::new(200.0, 200.0);
            let config = RuntimeConfig { size, frames: 3, ..RuntimeConfig::default() };
            let canvas = Runtime::run(config, SvgSurface::new(size), sketch.as_mut()).unwrap();
            assert!(canvas.surface().element_count() > 0, "{name} drew nothing");
        }
    }
}
