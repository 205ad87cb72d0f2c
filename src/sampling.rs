//! Categorical photon sampling from probability fields.

use log::debug;
use ndarray::Array2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;

use crate::error::SimulationError;
use crate::shape::FrameShape;

/// Tolerance on the total of a probability field.
const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Photon budget for a frame: `round(kbar * width * height)`.
///
/// # Errors
/// `InvalidParameter` if `kbar` is negative or not finite. `kbar = 0`
/// is a valid budget of zero photons.
pub fn photon_budget(shape: FrameShape, kbar: f64) -> Result<u64, SimulationError> {
    if !kbar.is_finite() || kbar < 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "kbar",
            value: kbar,
        });
    }
    Ok((kbar * shape.pixel_count() as f64).round() as u64)
}

/// Check a probability field against the sampler contract: matching
/// shape, finite non-negative entries, total within tolerance of 1.
fn validate_distribution(shape: FrameShape, dist: &Array2<f64>) -> Result<(), SimulationError> {
    if dist.dim() != shape.dim() {
        return Err(SimulationError::InvalidDistribution(format!(
            "distribution dimensions {:?} do not match frame shape {shape}",
            dist.dim()
        )));
    }
    for ((row, col), value) in dist.indexed_iter() {
        if !value.is_finite() || *value < 0.0 {
            return Err(SimulationError::InvalidDistribution(format!(
                "entry [{row}, {col}] is {value}"
            )));
        }
    }
    let total = dist.sum();
    if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(SimulationError::InvalidDistribution(format!(
            "total {total} is not 1 within {NORMALIZATION_TOLERANCE}"
        )));
    }
    Ok(())
}

/// Draw `round(kbar * pixels)` flat pixel indices from a probability
/// field, with replacement.
///
/// The field is flattened row-major; the returned indices unflatten
/// through [`FrameShape::unflatten_index`], the same mapping in both
/// directions. Used directly by the charge-sharing model, which needs
/// photon coordinates rather than accumulated counts.
pub fn sample_photon_indices(
    shape: FrameShape,
    kbar: f64,
    dist: &Array2<f64>,
    rng: &mut StdRng,
) -> Result<Vec<usize>, SimulationError> {
    validate_distribution(shape, dist)?;
    let n_photons = photon_budget(shape, kbar)?;
    if n_photons == 0 {
        return Ok(Vec::new());
    }

    // ndarray iterates standard-layout arrays row-major, matching the
    // flat_index/unflatten_index convention
    let sampler = WeightedIndex::new(dist.iter().copied())
        .map_err(|e| SimulationError::InvalidDistribution(e.to_string()))?;

    debug!("sampling {n_photons} photons on a {shape} frame");
    Ok((0..n_photons).map(|_| sampler.sample(rng)).collect())
}

/// Accumulate a photon-count frame from a probability field.
///
/// Draws `round(kbar * width * height)` categorical samples with
/// replacement and increments the hit pixels. The output sums exactly to
/// the photon budget; every entry is a non-negative integer stored as
/// `f64`.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `kbar` - Expected photons per pixel
/// * `dist` - Probability field over the frame (non-negative, sums to 1)
/// * `rng` - Random number generator instance
///
/// # Errors
/// * `InvalidParameter` if `kbar` is negative or not finite
/// * `InvalidDistribution` if `dist` violates the sampler contract
pub fn sample_photon_frame(
    shape: FrameShape,
    kbar: f64,
    dist: &Array2<f64>,
    rng: &mut StdRng,
) -> Result<Array2<f64>, SimulationError> {
    let indices = sample_photon_indices(shape, kbar, dist, rng)?;

    let mut frame = Array2::<f64>::zeros(shape.dim());
    for index in indices {
        let (row, col) = shape.unflatten_index(index);
        frame[[row, col]] += 1.0;
    }

    Ok(frame)
}
