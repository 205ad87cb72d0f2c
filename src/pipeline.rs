//! Full speckle-to-photon simulation pipeline.

use log::debug;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};

use crate::error::SimulationError;
use crate::sampling::sample_photon_frame;
use crate::shape::FrameShape;
use crate::speckle::modes::multimode_speckle_field;

/// Simulate one photon-counting frame of partially-coherent speckle.
///
/// Runs the whole pipeline: multi-mode speckle probability field with
/// the requested grain size and contrast (`1/sqrt(modes)`), then
/// `round(kbar * width * height)` photons sampled from it into a count
/// frame.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `modes` - Number of independent speckle modes, >= 1
/// * `speckle_size` - Speckle grain size in pixels
/// * `kbar` - Expected photons per pixel
/// * `rng_seed` - Optional seed for reproducible results
///
/// # Returns
/// An `Array2<f64>` of non-negative integer photon counts summing to the
/// photon budget.
pub fn simulate_speckle_frame(
    shape: FrameShape,
    modes: u32,
    speckle_size: f64,
    kbar: f64,
    rng_seed: Option<u64>,
) -> Result<Array2<f64>, SimulationError> {
    let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
    let mut rng = StdRng::seed_from_u64(rng_seed);

    debug!(
        "simulating {shape} speckle frame: {modes} modes, speckle size {speckle_size}, kbar {kbar}"
    );
    let dist = multimode_speckle_field(shape, speckle_size, modes, &mut rng)?;
    sample_photon_frame(shape, kbar, &dist, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_sums_to_photon_budget() {
        let shape = FrameShape::new(32, 32).unwrap();
        let frame = simulate_speckle_frame(shape, 4, 2.0, 1.0, Some(19)).unwrap();

        assert_eq!(frame.sum(), 1024.0);
        for value in frame.iter() {
            assert!(*value >= 0.0);
            assert_eq!(value.fract(), 0.0);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let shape = FrameShape::new(16, 16).unwrap();
        let a = simulate_speckle_frame(shape, 2, 2.0, 0.5, Some(4)).unwrap();
        let b = simulate_speckle_frame(shape, 2, 2.0, 0.5, Some(4)).unwrap();
        assert_eq!(a, b);

        let c = simulate_speckle_frame(shape, 2, 2.0, 0.5, Some(5)).unwrap();
        assert!(a.iter().zip(c.iter()).any(|(x, y)| x != y));
    }

    #[test]
    fn test_parameter_errors_propagate() {
        let shape = FrameShape::new(8, 8).unwrap();
        assert!(matches!(
            simulate_speckle_frame(shape, 0, 2.0, 1.0, Some(0)),
            Err(SimulationError::InvalidParameter { name: "modes", .. })
        ));
        assert!(matches!(
            simulate_speckle_frame(shape, 1, 99.0, 1.0, Some(0)),
            Err(SimulationError::DegenerateSpeckleSize { .. })
        ));
        assert!(matches!(
            simulate_speckle_frame(shape, 1, 2.0, -1.0, Some(0)),
            Err(SimulationError::InvalidParameter { name: "kbar", .. })
        ));
    }
}
