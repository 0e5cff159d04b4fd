use anyhow::{ensure, Context};
use clap::Parser as ClapParser;
use strokecross_engine::logging::{init_logging, LoggingConfig};
use strokecross_engine::query::{IntersectionConfig, Intersector};
use strokecross_engine::{Path, PathBuilder};
use strokecross_pathdata::{parse_str, PathData, Segment};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    probe(&args)
}

/// Arguments to [`probe`].
#[derive(ClapParser)]
#[command(
    version,
    about,
    long_about = "Report where two paths cross, by stroking both and sampling the shared pixels"
)]
pub struct Args {
    /// First path, as SVG path data (e.g. "M 20 20 L 180 180").
    first: String,
    /// Second path, as SVG path data.
    second: String,
    /// Stroke width used to rasterize both paths.
    #[arg(long, default_value_t = IntersectionConfig::default().stroke_width)]
    stroke_width: f32,
    /// Minimum alpha, exclusive, for a pixel to count as ink.
    #[arg(long, default_value_t = IntersectionConfig::default().alpha_threshold)]
    alpha_threshold: f32,
    /// Candidates closer than this are reported as one point.
    #[arg(long, default_value_t = IntersectionConfig::default().cluster_distance)]
    cluster_distance: f32,
    /// Log filter, e.g. "debug" or "strokecross_engine=trace". Defaults to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

/// Parses both paths, runs the query, and prints the result.
pub fn probe(args: &Args) -> anyhow::Result<()> {
    ensure!(
        args.stroke_width.is_finite() && args.stroke_width > 0.0,
        "--stroke-width must be a positive number, got {}",
        args.stroke_width
    );

    let first = parse_str(&args.first).with_context(|| "Failed to parse the first path.")?;
    let second = parse_str(&args.second).with_context(|| "Failed to parse the second path.")?;
    log::debug!(
        "parsed paths: {} segments in {} subpaths, {} segments in {} subpaths",
        first.segments.len(),
        first.subpath_count(),
        second.segments.len(),
        second.subpath_count()
    );

    let config = IntersectionConfig::default()
        .with_stroke_width(args.stroke_width)
        .with_alpha_threshold(args.alpha_threshold)
        .with_cluster_distance(args.cluster_distance);
    let intersector = Intersector::new().with_config(config);

    let points = intersector.intersection_points(&to_path(&first), &to_path(&second));

    println!("intersects: {}", !points.is_empty());
    for p in &points {
        println!("point: {} {}", p.x, p.y);
    }
    Ok(())
}

/// Replays parsed segments into an engine path.
fn to_path(data: &PathData) -> Path {
    let mut pb = PathBuilder::new();
    for seg in &data.segments {
        match *seg {
            Segment::MoveTo(p) => { pb.move_to(p.x, p.y); }
            Segment::LineTo(p) => { pb.line_to(p.x, p.y); }
            Segment::QuadTo { ctrl, to } => { pb.quad_to(ctrl.x, ctrl.y, to.x, to.y); }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            Segment::Close => { pb.close(); }
        }
    }
    pb.finish()
}
