//! Random phasor grids for speckle synthesis.

use std::f64::consts::PI;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;
use rustfft::num_complex::Complex64;

use crate::error::SimulationError;
use crate::shape::FrameShape;

/// Generate a random phasor grid for one speckle realization.
///
/// Allocates a complex grid over the full frame and fills the top-left
/// `round(height / speckle_size)` x `round(width / speckle_size)` block
/// with unit-magnitude phasors of independent uniform phase. The rest of
/// the grid stays zero; the zero padding is what sets the speckle grain
/// scale after the Fourier step.
///
/// The populated block is clamped to the frame, so a sub-pixel speckle
/// size degrades to one phasor per pixel rather than overrunning the
/// grid.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `speckle_size` - Speckle grain size in pixels
/// * `rng` - Random number generator instance
///
/// # Errors
/// * `InvalidParameter` if `speckle_size` is not finite and positive
/// * `DegenerateSpeckleSize` if the phasor grid rounds to zero cells in
///   either dimension
pub fn random_phasor_field(
    shape: FrameShape,
    speckle_size: f64,
    rng: &mut StdRng,
) -> Result<Array2<Complex64>, SimulationError> {
    if !speckle_size.is_finite() || speckle_size <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "speckle_size",
            value: speckle_size,
        });
    }

    let n_phasor_rows = (shape.height() as f64 / speckle_size).round() as usize;
    let n_phasor_cols = (shape.width() as f64 / speckle_size).round() as usize;
    if n_phasor_rows == 0 || n_phasor_cols == 0 {
        return Err(SimulationError::DegenerateSpeckleSize {
            speckle_size,
            width: shape.width(),
            height: shape.height(),
        });
    }

    let n_phasor_rows = n_phasor_rows.min(shape.height());
    let n_phasor_cols = n_phasor_cols.min(shape.width());

    let mut phasors = Array2::<Complex64>::zeros(shape.dim());
    for i in 0..n_phasor_rows {
        for j in 0..n_phasor_cols {
            let phase = rng.gen_range(0.0..2.0 * PI);
            phasors[[i, j]] = Complex64::from_polar(1.0, phase);
        }
    }

    Ok(phasors)
}
