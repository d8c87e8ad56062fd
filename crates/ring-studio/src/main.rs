//! Ring Studio
//!
//! Renders the three nested activity rings at a given progress to SVG.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use ring_engine::coords::Vec2;
use ring_engine::logging::{init_logging, LoggingConfig};
use ring_engine::paint::Color;
use ring_engine::ring::{
    activity_palette, progress_to_angle, ConcentricLayout, IdAllocator, RingDescriptor, RingError,
    RingSpec, RingStyle,
};

mod svg;

#[derive(Parser)]
#[command(name = "ring-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render activity rings to SVG", long_about = None)]
struct Cli {
    /// Progress in laps (1.0 = one full ring)
    #[arg(short, long, default_value_t = 0.5)]
    progress: f32,

    /// Ring variant
    #[arg(short, long, value_enum, default_value_t = StyleArg::HalfTurn)]
    style: StyleArg,

    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 400.0)]
    size: f32,

    /// Centerline radius of the innermost ring
    #[arg(long, default_value_t = 70.0)]
    inner_radius: f32,

    /// Stroke width of every ring
    #[arg(long, default_value_t = 30.0)]
    stroke_width: f32,

    /// Gap between adjacent rings
    #[arg(long, default_value_t = 2.0)]
    spacing: f32,

    /// Comma-separated hex colors for one ring, outermost first; repeat per ring
    #[arg(long = "ring", value_name = "COLORS")]
    rings: Vec<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StyleArg {
    HalfTurn,
    SevenEighths,
}

impl From<StyleArg> for RingStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::HalfTurn => RingStyle::half_turn(),
            StyleArg::SevenEighths => RingStyle::seven_eighths(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    let palette = if cli.rings.is_empty() {
        activity_palette()
    } else {
        cli.rings.iter().map(|ring| parse_colors(ring)).collect::<Result<Vec<_>>>()?
    };

    let layout = layout(&cli)?;
    let angle = progress_to_angle(cli.progress);
    debug!("progress {} laps -> {:.4} rad, {} rings", cli.progress, angle, palette.len());

    let mut ids = IdAllocator::new("ring");
    let rings = layout
        .specs(angle, &palette)
        .iter()
        .map(|spec| build_ring(spec, &mut ids))
        .collect::<Result<Vec<_>>>()?;

    let document = svg::render_document(cli.size, cli.size, Color::BLACK, &rings)
        .context("failed to serialize SVG")?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} rings to {}", rings.len(), path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Rings centered on the canvas, sized from the command line.
fn layout(cli: &Cli) -> Result<ConcentricLayout> {
    if !(cli.size.is_finite() && cli.size > 0.0) {
        bail!("canvas size must be a positive number, got {}", cli.size);
    }
    let center = Vec2::new(cli.size / 2.0, cli.size / 2.0);
    Ok(ConcentricLayout::new(center)
        .inner_radius(cli.inner_radius)
        .stroke_width(cli.stroke_width)
        .spacing(cli.spacing)
        .style(cli.style.into()))
}

/// Builds one ring, falling back to a neutral fill when it has no colors.
fn build_ring(spec: &RingSpec, ids: &mut IdAllocator) -> Result<RingDescriptor> {
    match RingDescriptor::build(spec, ids) {
        Err(RingError::EmptyColorSet) => {
            warn!("ring of radius {} has no colors, using neutral fill", spec.radius);
            let fallback = spec.clone().colors(vec![Color::NEUTRAL]);
            RingDescriptor::build(&fallback, ids)
                .with_context(|| format!("ring of radius {}", spec.radius))
        }
        other => other.with_context(|| format!("ring of radius {}", spec.radius)),
    }
}

/// `"e63754,#e64c85"` -> colors. An empty string yields no colors.
fn parse_colors(list: &str) -> Result<Vec<Color>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Color::from_hex(s).with_context(|| format!("in ring colors {list:?}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_colors_accepts_optional_hash() {
        let colors = parse_colors("e63754, #e64c85").unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1], Color::from_hex("#e64c85").unwrap());
    }

    #[test]
    fn parse_colors_reports_bad_literal() {
        let err = parse_colors("#e63754,nothex").unwrap_err();
        assert!(format!("{err:#}").contains("nothex"));
    }

    #[test]
    fn empty_ring_falls_back_to_neutral() {
        let spec = RingSpec::new(70.0, 30.0).progress_angle(1.0);
        let d = build_ring(&spec, &mut IdAllocator::default()).unwrap();
        let g = &d.gradients[0];
        assert!(g.stops.iter().all(|s| s.color == Color::NEUTRAL));
    }

    #[test]
    fn invalid_geometry_is_fatal() {
        let spec = RingSpec::new(-1.0, 30.0).colors(vec![Color::WHITE]);
        assert!(build_ring(&spec, &mut IdAllocator::default()).is_err());
    }

    #[test]
    fn cli_parses_style_and_rings() {
        let cli = Cli::parse_from([
            "ring-studio",
            "--progress",
            "1.6",
            "--style",
            "seven-eighths",
            "--ring",
            "ff0000,00ff00",
            "--ring",
            "0000ff",
        ]);
        assert_eq!(cli.progress, 1.6);
        assert!(matches!(cli.style, StyleArg::SevenEighths));
        assert_eq!(cli.rings.len(), 2);
        assert!(cli.output.is_none());
    }

    #[test]
    fn geometry_flags_reach_the_layout() {
        let cli = Cli::parse_from([
            "ring-studio",
            "--size",
            "300",
            "--inner-radius",
            "40",
            "--stroke-width",
            "20",
            "--spacing",
            "4",
        ]);
        let layout = layout(&cli).unwrap();
        assert_eq!(layout.center, Vec2::new(150.0, 150.0));
        assert_eq!(layout.radius_of(2, 3), 40.0);
        assert_eq!(layout.radius_of(0, 3), 88.0);
    }

    #[test]
    fn non_positive_size_is_rejected() {
        for size in ["--size=0", "--size=-10", "--size=NaN"] {
            let cli = Cli::parse_from(["ring-studio", size]);
            let err = layout(&cli).unwrap_err();
            assert!(err.to_string().contains("canvas size"), "{size}: {err}");
        }
    }
}
