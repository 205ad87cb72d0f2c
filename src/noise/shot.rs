//! Uniform shot-noise frames.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};

use crate::error::SimulationError;
use crate::sampling::sample_photon_frame;
use crate::shape::FrameShape;

/// Simulate a flat-illumination photon frame with shot noise only.
///
/// Builds the uniform probability field `1 / (width * height)` and draws
/// `round(kbar * width * height)` photons from it, so the per-pixel
/// counts carry pure sampling (Poisson-like) statistics around a flat
/// mean.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `kbar` - Expected photons per pixel
/// * `rng_seed` - Optional seed for reproducible results
pub fn shot_noise_frame(
    shape: FrameShape,
    kbar: f64,
    rng_seed: Option<u64>,
) -> Result<Array2<f64>, SimulationError> {
    let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let dist = Array2::from_elem(shape.dim(), 1.0 / shape.pixel_count() as f64);
    sample_photon_frame(shape, kbar, &dist, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_4x4_kbar_one_sums_to_16() {
        // Concrete scenario from the design brief: round(1.0 * 16) = 16
        let shape = FrameShape::new(4, 4).unwrap();
        let frame = shot_noise_frame(shape, 1.0, Some(1)).unwrap();

        assert_eq!(frame.sum(), 16.0);
        for value in frame.iter() {
            assert!(*value >= 0.0);
            assert_eq!(value.fract(), 0.0);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let shape = FrameShape::new(16, 16).unwrap();
        let a = shot_noise_frame(shape, 2.0, Some(5)).unwrap();
        let b = shot_noise_frame(shape, 2.0, Some(5)).unwrap();
        assert_eq!(a, b);

        let c = shot_noise_frame(shape, 2.0, Some(6)).unwrap();
        assert!(a.iter().zip(c.iter()).any(|(x, y)| x != y));
    }

    #[test]
    fn test_large_frame_is_near_uniform() {
        // Chi-square goodness of fit against the uniform expectation.
        // 100x100 pixels at kbar = 10 gives 100k photons, expected 10
        // per pixel; the statistic is ~ chi2(9999), so mean 9999 and
        // std sqrt(2 * 9999) ~ 141. Five sigma of headroom.
        let shape = FrameShape::new(100, 100).unwrap();
        let kbar = 10.0;
        let frame = shot_noise_frame(shape, kbar, Some(12)).unwrap();

        let expected = kbar;
        let chi2: f64 = frame
            .iter()
            .map(|&observed| (observed - expected).powi(2) / expected)
            .sum();

        let dof = (shape.pixel_count() - 1) as f64;
        assert!(
            (chi2 - dof).abs() < 5.0 * (2.0 * dof).sqrt(),
            "chi-square {chi2} too far from {dof}"
        );
    }
}
