//! Coordinate and geometry types shared by the path model and the raster pipeline.
//!
//! Path-space conventions:
//! - Real-valued (`f32`) coordinates
//! - +X right, +Y down (matches raster row order)
//!
//! Rasters address pixels with integer [`Pixel`] coordinates in the same space;
//! pixel `(x, y)` covers the unit square `[x, x + 1) × [y, y + 1)`.

mod pixel;
mod pixel_rect;
mod rect;
mod vec2;

pub use pixel::{IntersectionPoint, Pixel};
pub use pixel_rect::PixelRect;
pub use rect::Rect;
pub use vec2::Vec2;
