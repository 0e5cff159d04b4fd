//! Path intersection by raster sampling.
//!
//! Each path is stroked into its own hard-edged alpha raster; the two rasters
//! are sampled over their shared pixel frame, pixels inked in both become
//! candidates, and candidates are coalesced into one point per crossing.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Rect`, `Pixel`, `PixelRect` |
//! | [`path`] | `Path`, `PathCmd`, `PathBuilder`, shape constructors |
//! | [`raster`] | `render`, `AlphaRaster`, `PixelBuffer`, `StrokeRasterizer`, `SkiaRasterizer` |
//! | [`sample`] | `overlap`, `collect_candidates` |
//! | [`coalesce`] | greedy single-linkage clustering |
//! | [`query`] | `Intersector`, `IntersectionConfig`, `intersects`, `intersection_points` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use strokecross_engine::coords::Vec2;
//! use strokecross_engine::path::Path;
//!
//! let a = Path::line(Vec2::new(20.0, 20.0), Vec2::new(180.0, 180.0));
//! let b = Path::line(Vec2::new(180.0, 20.0), Vec2::new(20.0, 180.0));
//!
//! assert!(a.intersects(&b));
//! let points = a.intersection_points_with(&b);
//! assert_eq!(points.len(), 1);
//! ```

pub mod coalesce;
pub mod coords;
pub mod logging;
pub mod path;
pub mod query;
pub mod raster;
pub mod sample;

pub use coords::{IntersectionPoint, Pixel};
pub use path::{Path, PathBuilder};
pub use query::{intersection_points, intersects, IntersectionConfig, Intersector};
