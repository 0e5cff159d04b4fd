use crate::coalesce::coalesce;
use crate::coords::IntersectionPoint;
use crate::path::Path;
use crate::raster::{self, AlphaRaster, RasterOutcome, SkiaRasterizer, StrokeRasterizer};
use crate::sample::{collect_candidates, overlap};

use super::IntersectionConfig;

/// Runs intersection queries with a fixed rasterizer and configuration.
///
/// Holds no per-query state; a shared `Intersector` may serve independent
/// queries from several threads when its rasterizer allows it.
#[derive(Debug, Clone, Default)]
pub struct Intersector<R = SkiaRasterizer> {
    rasterizer: R,
    config: IntersectionConfig,
}

impl Intersector<SkiaRasterizer> {
    /// Default configuration with the `tiny-skia` rasterizer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: StrokeRasterizer> Intersector<R> {
    /// Default configuration with a custom rasterizer.
    #[inline]
    pub fn with_rasterizer(rasterizer: R) -> Self {
        Self {
            rasterizer,
            config: IntersectionConfig::default(),
        }
    }

    #[inline]
    pub fn with_config(mut self, config: IntersectionConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    #[inline]
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Renders `path` with the configured stroke width.
    ///
    /// The raster can be kept and compared against many others with
    /// [`raster_intersection_points`](Self::raster_intersection_points).
    pub fn render(&self, path: &Path) -> RasterOutcome {
        raster::render(path, self.config.stroke_width, &self.rasterizer)
    }

    /// Approximate intersection points of `a` and `b`, in cluster-creation order.
    ///
    /// Both paths are always rendered; if either fails the result is empty.
    pub fn intersection_points(&self, a: &Path, b: &Path) -> Vec<IntersectionPoint> {
        match (self.render(a), self.render(b)) {
            (Ok(ra), Ok(rb)) => self.raster_intersection_points(&ra, &rb),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("path could not be rasterized ({err}); reporting no intersection");
                Vec::new()
            }
        }
    }

    /// Whether `a` and `b` intersect. Computes every point; no early exit.
    pub fn intersects(&self, a: &Path, b: &Path) -> bool {
        !self.intersection_points(a, b).is_empty()
    }

    /// Intersection points of two already rendered paths.
    pub fn raster_intersection_points(
        &self,
        a: &AlphaRaster,
        b: &AlphaRaster,
    ) -> Vec<IntersectionPoint> {
        let samples = overlap(a, b);
        if samples.region().is_none() {
            log::trace!("frames {:?} and {:?} share no pixels", a.frame(), b.frame());
            return Vec::new();
        }

        let candidates = collect_candidates(samples, self.config.alpha_threshold);
        let points = coalesce(&candidates, self.config.cluster_distance);

        log::debug!(
            "{} candidate pixels coalesced into {} intersection points",
            candidates.len(),
            points.len()
        );

        points
    }

    /// Whether two already rendered paths intersect.
    pub fn raster_intersects(&self, a: &AlphaRaster, b: &AlphaRaster) -> bool {
        !self.raster_intersection_points(a, b).is_empty()
    }
}
