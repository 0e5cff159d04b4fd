/// Integer pixel address in path-space.
///
/// Both rasters of a comparison share this frame; buffer-local indices are
/// derived per raster by subtracting its frame origin.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

/// One reported intersection: the rounded centroid of a candidate cluster.
pub type IntersectionPoint = Pixel;

impl Pixel {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two pixel addresses.
    #[inline]
    pub fn distance_to(self, other: Pixel) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Pixel {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Pixel::new(x, y)
    }
}
