use crate::coalesce::DEFAULT_CLUSTER_DISTANCE;
use crate::raster::DEFAULT_STROKE_WIDTH;
use crate::sample::DEFAULT_ALPHA_THRESHOLD;

/// Tuning parameters for an intersection query.
///
/// Passed explicitly per [`Intersector`](super::Intersector); nothing here is
/// process-wide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionConfig {
    /// Stroke width both paths are rendered with, in path units.
    ///
    /// Must be positive and finite; otherwise rendering fails and the query
    /// reports no intersection.
    pub stroke_width: f32,

    /// Alpha a pixel must exceed in both rasters to count as a candidate.
    pub alpha_threshold: f32,

    /// Candidates closer than this to a cluster member join that cluster.
    ///
    /// Should comfortably exceed the hit-blob size for `stroke_width` while
    /// staying below the spacing of distinct crossings.
    pub cluster_distance: f32,
}

impl IntersectionConfig {
    #[inline]
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[inline]
    pub fn with_alpha_threshold(mut self, alpha_threshold: f32) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    #[inline]
    pub fn with_cluster_distance(mut self, cluster_distance: f32) -> Self {
        self.cluster_distance = cluster_distance;
        self
    }
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            cluster_distance: DEFAULT_CLUSTER_DISTANCE,
        }
    }
}
