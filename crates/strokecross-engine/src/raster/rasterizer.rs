use tiny_skia::{Paint, Pixmap, Stroke, Transform};

use crate::coords::PixelRect;
use crate::path::{Path, PathCmd};

use super::{PixelBuffer, PixelFormat, RenderError};

/// Stroke-rendering primitive consumed by the raster pipeline.
///
/// Implementations draw `path` translated so that path-space
/// `(frame.x, frame.y)` lands on buffer-local `(0, 0)`, into a buffer of
/// exactly `frame.width × frame.height` pixels, with a hard-edged
/// (non anti-aliased) stroke of `stroke_width`.
pub trait StrokeRasterizer {
    fn render_stroke(
        &self,
        path: &Path,
        frame: PixelRect,
        stroke_width: f32,
    ) -> Result<PixelBuffer, RenderError>;
}

impl<R: StrokeRasterizer + ?Sized> StrokeRasterizer for &R {
    fn render_stroke(
        &self,
        path: &Path,
        frame: PixelRect,
        stroke_width: f32,
    ) -> Result<PixelBuffer, RenderError> {
        (**self).render_stroke(path, frame, stroke_width)
    }
}

/// CPU stroke rasterizer backed by `tiny-skia`.
///
/// Ink is opaque black with butt caps and miter joins; anti-aliasing is off
/// so every pixel is either fully inked or empty.
#[derive(Debug, Copy, Clone, Default)]
pub struct SkiaRasterizer;

impl StrokeRasterizer for SkiaRasterizer {
    fn render_stroke(
        &self,
        path: &Path,
        frame: PixelRect,
        stroke_width: f32,
    ) -> Result<PixelBuffer, RenderError> {
        let sk_path = to_skia_path(path).ok_or(RenderError::EmptyPath)?;

        let mut pixmap = Pixmap::new(frame.width, frame.height).ok_or(
            RenderError::SurfaceAllocation {
                width: frame.width,
                height: frame.height,
            },
        )?;

        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = false;

        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };

        let transform = Transform::from_translate(-(frame.x as f32), -(frame.y as f32));
        pixmap.stroke_path(&sk_path, &paint, &stroke, transform, None);

        let (width, height) = (pixmap.width(), pixmap.height());
        PixelBuffer::new(
            pixmap.take(),
            width,
            height,
            width as usize * PixelFormat::Rgba8.channels(),
            PixelFormat::Rgba8,
        )
    }
}

fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for cmd in path.cmds() {
        match *cmd {
            PathCmd::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCmd::LineTo(p) => pb.line_to(p.x, p.y),
            PathCmd::QuadTo(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
            PathCmd::CubicTo(c1, c2, p) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}
