use super::{Pixel, Rect};

/// Integer-aligned pixel frame: `[x, x + width) × [y, y + height)`.
///
/// A raster's frame is derived once from its path-space bounding box and is
/// reused for every lookup against that raster.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest pixel frame covering `rect`: origin floored, far edge ceiled.
    ///
    /// Each axis spans at least one pixel. Returns `None` for non-finite
    /// rectangles or ones that fall outside the `i32` pixel range.
    pub fn enclosing(rect: Rect) -> Option<PixelRect> {
        if !rect.is_finite() {
            return None;
        }
        let r = rect.normalized();
        let min = r.min();
        let max = r.max();

        let x0 = to_i32(min.x.floor())?;
        let y0 = to_i32(min.y.floor())?;
        let x1 = to_i32(max.x.ceil())?;
        let y1 = to_i32(max.y.ceil())?;

        let width = (i64::from(x1) - i64::from(x0)).max(1);
        let height = (i64::from(y1) - i64::from(y0)).max(1);

        Some(PixelRect::new(
            x0,
            y0,
            u32::try_from(width).ok()?,
            u32::try_from(height).ok()?,
        ))
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    #[inline]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Half-open containment.
    #[inline]
    pub fn contains(self, p: Pixel) -> bool {
        let x = i64::from(p.x);
        let y = i64::from(p.y);
        x >= i64::from(self.x) && y >= i64::from(self.y) && x < self.right() && y < self.bottom()
    }

    /// Overlap of two frames, or `None` when they share no pixel.
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        let w = x1 - i64::from(x0);
        let h = y1 - i64::from(y0);

        if w <= 0 || h <= 0 {
            None
        } else {
            // Both spans are bounded by an input width/height, so they fit in u32.
            Some(PixelRect::new(x0, y0, w as u32, h as u32))
        }
    }

    /// Iterates every pixel of the frame, row-major (y outer, x inner, ascending).
    pub fn pixels(self) -> impl Iterator<Item = Pixel> {
        let xs = i64::from(self.x)..self.right();
        (i64::from(self.y)..self.bottom()).flat_map(move |y| {
            // Pixels of a frame lie inside the i32 range by construction.
            xs.clone().map(move |x| Pixel::new(x as i32, y as i32))
        })
    }
}

fn to_i32(v: f32) -> Option<i32> {
    // i32::MAX rounds up to 2^31 as f32, so the upper bound is exclusive.
    if v >= i32::MIN as f32 && v < i32::MAX as f32 {
        Some(v as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── enclosing ─────────────────────────────────────────────────────────

    #[test]
    fn enclosing_integral_rect_is_exact() {
        let f = PixelRect::enclosing(Rect::new(0.0, 0.0, 1000.0, 1000.0)).unwrap();
        assert_eq!(f, PixelRect::new(0, 0, 1000, 1000));
    }

    #[test]
    fn enclosing_floors_origin_and_ceils_far_edge() {
        let f = PixelRect::enclosing(Rect::new(10.25, 20.75, 5.5, 0.5)).unwrap();
        assert_eq!(f, PixelRect::new(10, 20, 6, 2));
    }

    #[test]
    fn enclosing_negative_origin_floors_away_from_zero() {
        let f = PixelRect::enclosing(Rect::new(-0.5, -10.2, 1.0, 1.0)).unwrap();
        assert_eq!(f.x, -1);
        assert_eq!(f.y, -11);
    }

    #[test]
    fn enclosing_zero_extent_spans_one_pixel() {
        let f = PixelRect::enclosing(Rect::new(5.0, 5.0, 0.0, 0.0)).unwrap();
        assert_eq!(f, PixelRect::new(5, 5, 1, 1));
    }

    #[test]
    fn enclosing_rejects_non_finite() {
        assert!(PixelRect::enclosing(Rect::new(f32::NAN, 0.0, 1.0, 1.0)).is_none());
        assert!(PixelRect::enclosing(Rect::new(0.0, 0.0, f32::INFINITY, 1.0)).is_none());
    }

    #[test]
    fn enclosing_rejects_out_of_range() {
        assert!(PixelRect::enclosing(Rect::new(0.0, 0.0, 1.0e12, 1.0)).is_none());
    }

    #[test]
    fn enclosing_rejects_edge_at_two_pow_31() {
        assert!(PixelRect::enclosing(Rect::new(2_147_483_648.0, 0.0, 1.0, 1.0)).is_none());
        assert!(PixelRect::enclosing(Rect::new(0.0, 2_147_483_520.0, 1.0, 128.0)).is_none());
    }

    #[test]
    fn enclosing_accepts_i32_min_origin() {
        let f = PixelRect::enclosing(Rect::new(-2_147_483_648.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(f.x, i32::MIN);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlap() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(-5, 5, 10, 10);
        assert_eq!(a.intersect(b), Some(PixelRect::new(0, 5, 5, 5)));
    }

    #[test]
    fn intersect_touching_is_none() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[test]
    fn pixels_are_row_major() {
        let px: Vec<Pixel> = PixelRect::new(-1, 4, 2, 2).pixels().collect();
        assert_eq!(
            px,
            vec![Pixel::new(-1, 4), Pixel::new(0, 4), Pixel::new(-1, 5), Pixel::new(0, 5)]
        );
    }

    #[test]
    fn contains_is_half_open() {
        let f = PixelRect::new(0, 0, 3, 3);
        assert!(f.contains(Pixel::new(0, 0)));
        assert!(f.contains(Pixel::new(2, 2)));
        assert!(!f.contains(Pixel::new(3, 2)));
        assert!(!f.contains(Pixel::new(-1, 0)));
    }
}
