use crate::coords::{Pixel, PixelRect};
use crate::raster::AlphaRaster;

/// Both rasters' alpha at one shared path-space pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub pixel: Pixel,
    pub alpha_a: f32,
    pub alpha_b: f32,
}

/// Row-major walk over the pixels two rasters have in common.
///
/// Created by [`overlap`].
#[derive(Debug, Clone)]
pub struct Overlap<'a> {
    a: &'a AlphaRaster,
    b: &'a AlphaRaster,
    region: Option<PixelRect>,
    x: i64,
    y: i64,
}

/// Samples `a` and `b` over the intersection of their frames.
///
/// Pixels are visited with `y` outer and `x` inner, both ascending, over the
/// half-open region. Disjoint frames produce an empty walk that never reads
/// either buffer.
pub fn overlap<'a>(a: &'a AlphaRaster, b: &'a AlphaRaster) -> Overlap<'a> {
    let region = a.frame().intersect(b.frame());
    let (x, y) = region.map_or((0, 0), |r| (i64::from(r.x), i64::from(r.y)));
    Overlap { a, b, region, x, y }
}

impl Overlap<'_> {
    /// Shared pixel region, or `None` when the frames are disjoint.
    #[inline]
    pub fn region(&self) -> Option<PixelRect> {
        self.region
    }
}

impl Iterator for Overlap<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let region = self.region?;
        if self.y >= region.bottom() {
            return None;
        }

        // The region lies inside both frames, so coordinates fit in i32.
        let pixel = Pixel::new(self.x as i32, self.y as i32);

        self.x += 1;
        if self.x >= region.right() {
            self.x = i64::from(region.x);
            self.y += 1;
        }

        Some(Sample {
            pixel,
            alpha_a: self.a.alpha_at(pixel),
            alpha_b: self.b.alpha_at(pixel),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.region {
            None => 0,
            Some(r) if self.y >= r.bottom() => 0,
            Some(r) => {
                let full_rows = (r.bottom() - self.y - 1) as u64 * u64::from(r.width);
                full_rows + (r.right() - self.x) as u64
            }
        };
        let n = usize::try_from(remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(remaining).ok())
    }
}
