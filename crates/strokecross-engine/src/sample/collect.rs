use crate::coords::Pixel;

use super::Sample;

/// Alpha a pixel must exceed in both rasters to count as a candidate.
pub const DEFAULT_ALPHA_THRESHOLD: f32 = 0.05;

/// Keeps pixels where both alphas are strictly above `threshold`.
///
/// Scan order is preserved; the coalescer depends on it.
pub fn collect_candidates<I>(samples: I, threshold: f32) -> Vec<Pixel>
where
    I: IntoIterator<Item = Sample>,
{
    samples
        .into_iter()
        .filter(|s| s.alpha_a > threshold && s.alpha_b > threshold)
        .map(|s| s.pixel)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::fixtures::raster;
    use crate::sample::overlap;

    fn s(x: i32, y: i32, a: f32, b: f32) -> Sample {
        Sample { pixel: Pixel::new(x, y), alpha_a: a, alpha_b: b }
    }

    #[test]
    fn requires_both_alphas_above_threshold() {
        let samples = [s(0, 0, 1.0, 1.0), s(1, 0, 1.0, 0.0), s(2, 0, 0.0, 1.0), s(3, 0, 0.5, 0.06)];
        assert_eq!(
            collect_candidates(samples, DEFAULT_ALPHA_THRESHOLD),
            vec![Pixel::new(0, 0), Pixel::new(3, 0)]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let samples = [s(0, 0, 0.05, 1.0), s(1, 0, 1.0, 0.05)];
        assert!(collect_candidates(samples, 0.05).is_empty());
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let samples = [s(5, 5, 1.0, 1.0), s(0, 0, 1.0, 1.0), s(5, 5, 1.0, 1.0)];
        assert_eq!(
            collect_candidates(samples, DEFAULT_ALPHA_THRESHOLD),
            vec![Pixel::new(5, 5), Pixel::new(0, 0), Pixel::new(5, 5)]
        );
    }

    #[test]
    fn raising_threshold_never_adds_candidates() {
        let a = raster(0, 0, &[&[10, 40, 90], &[140, 200, 255]]);
        let b = raster(0, 0, &[&[255, 200, 150], &[100, 50, 12]]);
        let mut previous = usize::MAX;
        for threshold in [0.0, 0.05, 0.1, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let count = collect_candidates(overlap(&a, &b), threshold).len();
            assert!(count <= previous, "threshold {threshold} gave {count} > {previous}");
            previous = count;
        }
        assert_eq!(previous, 0);
    }
}
