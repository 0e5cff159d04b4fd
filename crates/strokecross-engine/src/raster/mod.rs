//! Rasterizer adapter: turns a [`Path`] into an [`AlphaRaster`].
//!
//! The raster frame is the path's tight bounding box, floored to at least one
//! unit per axis and snapped outward to whole pixels. That snap happens once
//! here; every later lookup against the raster reuses the stored frame.

mod alpha_raster;
mod buffer;
mod error;
mod rasterizer;

pub use alpha_raster::AlphaRaster;
pub use buffer::{PixelBuffer, PixelFormat};
pub use error::RenderError;
pub use rasterizer::{SkiaRasterizer, StrokeRasterizer};

use crate::coords::PixelRect;
use crate::path::Path;

/// Outcome of rendering one path.
pub type RasterOutcome = Result<AlphaRaster, RenderError>;

/// Stroke width used when none is configured.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Minimum bounding-box extent per axis, in path units.
pub const MIN_EXTENT: f32 = 1.0;

/// Upper bound on a single RGBA raster allocation.
pub const MAX_RASTER_BYTES: u64 = 512 * 1024 * 1024;

const BYTES_PER_PIXEL: u64 = 4;

/// Renders `path` as a hard-edged stroke of `stroke_width` using `rasterizer`.
pub fn render<R>(path: &Path, stroke_width: f32, rasterizer: &R) -> RasterOutcome
where
    R: StrokeRasterizer + ?Sized,
{
    if !(stroke_width.is_finite() && stroke_width > 0.0) {
        return Err(RenderError::InvalidStrokeWidth(stroke_width));
    }

    if !path.is_finite() {
        return Err(RenderError::NonFiniteBounds);
    }
    let bounds = path.bounds().ok_or(RenderError::EmptyPath)?;

    let geometry = bounds.with_min_size(MIN_EXTENT);
    let frame = PixelRect::enclosing(geometry).ok_or(RenderError::OutOfRange)?;
    guard_frame(frame)?;

    let buffer = rasterizer.render_stroke(path, frame, stroke_width)?;
    let raster = AlphaRaster::new(geometry, frame, buffer)?;

    log::debug!(
        "rendered {}x{} raster at ({}, {}) for bounds {:?}, stroke width {}",
        frame.width,
        frame.height,
        frame.x,
        frame.y,
        raster.geometry(),
        stroke_width
    );

    Ok(raster)
}

fn guard_frame(frame: PixelRect) -> Result<(), RenderError> {
    let too_large = frame
        .area()
        .checked_mul(BYTES_PER_PIXEL)
        .is_none_or(|bytes| bytes > MAX_RASTER_BYTES);
    if too_large {
        return Err(RenderError::TooLarge {
            width: frame.width,
            height: frame.height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Pixel, Rect, Vec2};
    use crate::path::PathBuilder;

    /// Returns a buffer of the wrong size regardless of the frame.
    struct WrongSize;

    impl StrokeRasterizer for WrongSize {
        fn render_stroke(&self, _: &Path, _: PixelRect, _: f32) -> Result<PixelBuffer, RenderError> {
            PixelBuffer::new(vec![0; 4], 2, 2, 2, PixelFormat::Alpha8)
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_gets_one_pixel_row() {
        let path = Path::line(Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0));
        let raster = render(&path, DEFAULT_STROKE_WIDTH, &SkiaRasterizer).unwrap();
        assert_eq!(raster.frame(), PixelRect::new(0, 50, 100, 1));
        assert_eq!(raster.geometry(), Rect::new(0.0, 50.0, 100.0, 1.0));
        assert_eq!(raster.ink_pixels(0.05).len(), 100);
    }

    #[test]
    fn zero_length_segment_is_not_fatal() {
        let path = PathBuilder::new().move_to(5.0, 5.0).line_to(5.0, 5.0).finish();
        // Either outcome is acceptable; only a panic would be a defect.
        if let Ok(raster) = render(&path, DEFAULT_STROKE_WIDTH, &SkiaRasterizer) {
            assert_eq!(raster.frame(), PixelRect::new(5, 5, 1, 1));
        }
    }

    #[test]
    fn negative_space_frame() {
        let path = Path::line(Vec2::new(0.0, 0.0), Vec2::new(-1000.0, 1000.0));
        let raster = render(&path, DEFAULT_STROKE_WIDTH, &SkiaRasterizer).unwrap();
        assert_eq!(raster.frame(), PixelRect::new(-1000, 0, 1000, 1000));
        // The diagonal passes through the centre of pixel (-500, 499).
        assert_eq!(raster.alpha_at(Pixel::new(-500, 499)), 1.0);
        assert_eq!(raster.alpha_at(Pixel::new(-900, 100)), 0.0);
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn rejects_bad_stroke_width() {
        let path = Path::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        for w in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                render(&path, w, &SkiaRasterizer),
                Err(RenderError::InvalidStrokeWidth(_))
            ));
        }
    }

    #[test]
    fn empty_path_fails() {
        assert_eq!(
            render(&Path::default(), DEFAULT_STROKE_WIDTH, &SkiaRasterizer),
            Err(RenderError::EmptyPath)
        );
    }

    #[test]
    fn non_finite_bounds_fail() {
        let path = Path::line(Vec2::new(0.0, 0.0), Vec2::new(f32::NAN, 1.0));
        assert_eq!(
            render(&path, DEFAULT_STROKE_WIDTH, &SkiaRasterizer),
            Err(RenderError::NonFiniteBounds)
        );
    }

    #[test]
    fn oversized_frame_fails_before_allocation() {
        let path = Path::line(Vec2::new(0.0, 0.0), Vec2::new(100_000.0, 100_000.0));
        assert_eq!(
            render(&path, DEFAULT_STROKE_WIDTH, &WrongSize),
            Err(RenderError::TooLarge { width: 100_000, height: 100_000 })
        );
    }

    #[test]
    fn buffer_size_mismatch_fails() {
        let path = Path::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert_eq!(
            render(&path, DEFAULT_STROKE_WIDTH, &WrongSize),
            Err(RenderError::FrameMismatch { expected: (10, 10), actual: (2, 2) })
        );
    }
}
