//! Intersection query facade.
//!
//! Orchestrates the pipeline for a pair of paths:
//! render both → sample the shared frame → collect candidates → coalesce.
//! A path that cannot be rendered "cannot be shown to intersect": the query
//! returns no points rather than an error.

mod config;
mod intersector;

pub use config::IntersectionConfig;
pub use intersector::Intersector;

use crate::coords::IntersectionPoint;
use crate::path::Path;

/// Approximate intersection points of `a` and `b` with default settings.
pub fn intersection_points(a: &Path, b: &Path) -> Vec<IntersectionPoint> {
    Intersector::new().intersection_points(a, b)
}

/// Whether `a` and `b` intersect, with default settings.
///
/// Runs the full point computation; there is no early exit.
pub fn intersects(a: &Path, b: &Path) -> bool {
    Intersector::new().intersects(a, b)
}

impl Path {
    /// Whether this path crosses `other`, with default settings.
    pub fn intersects(&self, other: &Path) -> bool {
        intersects(self, other)
    }

    /// Approximate points where this path crosses `other`, with default settings.
    pub fn intersection_points_with(&self, other: &Path) -> Vec<IntersectionPoint> {
        intersection_points(self, other)
    }
}
