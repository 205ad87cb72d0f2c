//! Multi-mode (reduced-contrast) speckle fields.

use ndarray::Array2;
use rand::rngs::StdRng;

use crate::error::SimulationError;
use crate::shape::FrameShape;
use crate::speckle::field::speckle_field;

/// Sum `modes` independent speckle realizations and renormalize.
///
/// Each mode is a fresh draw from [`speckle_field`]; the incoherent sum
/// models partially-coherent illumination with contrast roughly
/// `1/sqrt(modes)`. `modes = 1` is a single plain realization.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `speckle_size` - Speckle grain size in pixels
/// * `modes` - Number of independent modes, must be >= 1
/// * `rng` - Random number generator instance
///
/// # Errors
/// * `InvalidParameter` if `modes` is 0
/// * Anything [`speckle_field`] can return
pub fn multimode_speckle_field(
    shape: FrameShape,
    speckle_size: f64,
    modes: u32,
    rng: &mut StdRng,
) -> Result<Array2<f64>, SimulationError> {
    if modes == 0 {
        return Err(SimulationError::InvalidParameter {
            name: "modes",
            value: 0.0,
        });
    }

    let mut dist = speckle_field(shape, speckle_size, rng)?;
    for _ in 1..modes {
        dist += &speckle_field(shape, speckle_size, rng)?;
    }

    // Each mode sums to 1, so the total is `modes` up to rounding
    let total = dist.sum();
    dist.mapv_inplace(|v| v / total);

    Ok(dist)
}
