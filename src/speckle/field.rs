//! Single-mode speckle intensity synthesis.

use ndarray::Array2;
use rand::rngs::StdRng;
use rustfft::{num_complex::Complex64, FftPlanner};

use crate::error::SimulationError;
use crate::shape::FrameShape;
use crate::speckle::phasor::random_phasor_field;

/// In-place 2D FFT: forward pass over rows, then over columns.
///
/// Columns are not contiguous in a standard-layout array, so they go
/// through a scratch buffer.
fn fft_2d(field: &mut Array2<Complex64>) {
    let (rows, cols) = field.dim();
    let mut planner = FftPlanner::new();

    let row_fft = planner.plan_fft_forward(cols);
    for mut row in field.rows_mut() {
        let slice = row
            .as_slice_mut()
            .expect("standard-layout rows are contiguous");
        row_fft.process(slice);
    }

    let col_fft = planner.plan_fft_forward(rows);
    let mut scratch = vec![Complex64::new(0.0, 0.0); rows];
    for c in 0..cols {
        for r in 0..rows {
            scratch[r] = field[[r, c]];
        }
        col_fft.process(&mut scratch);
        for r in 0..rows {
            field[[r, c]] = scratch[r];
        }
    }
}

/// Synthesize one normalized speckle intensity realization.
///
/// Fourier-transforms a fresh random phasor grid and takes the squared
/// magnitude, then normalizes so the result is a probability field
/// summing to 1. The only randomness enters through the phasor grid;
/// the transform itself is deterministic.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `speckle_size` - Speckle grain size in pixels
/// * `rng` - Random number generator instance
///
/// # Returns
/// A non-negative `Array2<f64>` over the frame, summing to 1.
pub fn speckle_field(
    shape: FrameShape,
    speckle_size: f64,
    rng: &mut StdRng,
) -> Result<Array2<f64>, SimulationError> {
    let mut phasors = random_phasor_field(shape, speckle_size, rng)?;
    fft_2d(&mut phasors);

    let mut intensity = phasors.mapv(|z| z.norm_sqr());

    // At least one phasor is guaranteed, so the total is positive for
    // any non-degenerate input; the guard catches numerical surprises.
    let total = intensity.sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(SimulationError::InvalidDistribution(format!(
            "speckle intensity total {total} is not positive-finite"
        )));
    }
    intensity.mapv_inplace(|v| v / total);

    Ok(intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn test_speckle_field_is_normalized() {
        // Concrete scenario: 8x8 frame, speckle size 2, single mode
        let shape = FrameShape::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let field = speckle_field(shape, 2.0, &mut rng).unwrap();

        assert_eq!(field.dim(), (8, 8));
        assert_relative_eq!(field.sum(), 1.0, epsilon = 1e-9);
        for value in field.iter() {
            assert!(*value >= 0.0);
        }
    }

    #[test]
    fn test_single_phasor_gives_flat_field() {
        // One phasor FFTs to constant magnitude: the flat distribution
        let shape = FrameShape::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let field = speckle_field(shape, 4.0, &mut rng).unwrap();
        for value in field.iter() {
            assert_relative_eq!(*value, 1.0 / 16.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let shape = FrameShape::new(16, 16).unwrap();
        let a = speckle_field(shape, 2.0, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = speckle_field(shape, 2.0, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fully_developed_speckle_contrast_near_one() {
        // Single-mode speckle has contrast (std/mean) ~ 1
        let shape = FrameShape::new(128, 128).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let field = speckle_field(shape, 4.0, &mut rng).unwrap();

        let mean = field.mean().unwrap();
        let contrast = field.std(0.0) / mean;
        assert_relative_eq!(contrast, 1.0, epsilon = 0.15);
    }

    #[test]
    fn test_degenerate_size_propagates() {
        let shape = FrameShape::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            speckle_field(shape, 50.0, &mut rng),
            Err(SimulationError::DegenerateSpeckleSize { .. })
        ));
    }
}
