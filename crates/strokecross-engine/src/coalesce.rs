//! Candidate coalescing: one representative point per intersection.
//!
//! Greedy single-linkage grouping. Each candidate, in scan order, joins the
//! first cluster (by creation order) holding a member strictly closer than
//! `max_distance`; otherwise it opens a new cluster. The result is
//! order-sensitive: first-fit, not best-fit, and clusters are never merged
//! after the fact.
//!
//! Centroids are rounded half away from zero (`f64::round`).

use crate::coords::{IntersectionPoint, Pixel};

/// Default cluster linkage distance, in path units.
///
/// Two crossing 2-unit strokes leave a hit blob roughly 4–8 units across.
pub const DEFAULT_CLUSTER_DISTANCE: f32 = 6.0;

/// Reduces candidate pixels to one centroid per cluster, in cluster-creation order.
pub fn coalesce(candidates: &[Pixel], max_distance: f32) -> Vec<IntersectionPoint> {
    if candidates.len() <= 1 {
        return candidates.to_vec();
    }

    let max_distance = f64::from(max_distance);
    let mut clusters: Vec<Vec<Pixel>> = Vec::new();

    for &candidate in candidates {
        let home = clusters.iter().position(|cluster| {
            cluster
                .iter()
                .any(|&member| member.distance_to(candidate) < max_distance)
        });
        match home {
            Some(i) => clusters[i].push(candidate),
            None => clusters.push(vec![candidate]),
        }
    }

    log::trace!("coalesced {} candidates into {} clusters", candidates.len(), clusters.len());

    clusters.iter().map(|cluster| centroid(cluster)).collect()
}

fn centroid(cluster: &[Pixel]) -> IntersectionPoint {
    let n = cluster.len() as f64;
    let (sx, sy) = cluster.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y))
    });
    // A mean of i32 values is itself within i32 range.
    Pixel::new(
        (sx as f64 / n).round() as i32,
        (sy as f64 / n).round() as i32,
    )
}
