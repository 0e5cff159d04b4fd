use crate::coords::{Pixel, PixelRect, Rect};

use super::{PixelBuffer, RenderError};

/// A rendered path: stroke alpha plus its mapping back to path-space.
///
/// Invariant: `buffer` is exactly `frame.width × frame.height`, and buffer-local
/// `(0, 0)` is path-space `(frame.x, frame.y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaRaster {
    geometry: Rect,
    frame: PixelRect,
    buffer: PixelBuffer,
}

impl AlphaRaster {
    pub fn new(geometry: Rect, frame: PixelRect, buffer: PixelBuffer) -> Result<Self, RenderError> {
        if buffer.width() != frame.width || buffer.height() != frame.height {
            return Err(RenderError::FrameMismatch {
                expected: (frame.width, frame.height),
                actual: (buffer.width(), buffer.height()),
            });
        }
        Ok(Self { geometry, frame, buffer })
    }

    /// Path-space bounding box the raster was rendered for (after the minimum-size floor).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Integer pixel frame covered by the buffer.
    #[inline]
    pub fn frame(&self) -> PixelRect {
        self.frame
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Alpha at path-space pixel `p`.
    ///
    /// # Panics
    /// Panics if `p` lies outside [`frame`](Self::frame).
    #[inline]
    pub fn alpha_at(&self, p: Pixel) -> f32 {
        assert!(self.frame.contains(p), "pixel {p:?} outside raster frame {:?}", self.frame);
        // Inside the frame both offsets lie in [0, width) × [0, height).
        let lx = (i64::from(p.x) - i64::from(self.frame.x)) as u32;
        let ly = (i64::from(p.y) - i64::from(self.frame.y)) as u32;
        self.buffer.alpha_at(lx, ly)
    }

    /// Path-space pixels whose alpha exceeds `threshold`, row-major.
    pub fn ink_pixels(&self, threshold: f32) -> Vec<Pixel> {
        self.frame
            .pixels()
            .filter(|&p| self.alpha_at(p) > threshold)
            .collect()
    }
}
