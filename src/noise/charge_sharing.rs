//! Per-photon charge-sharing (Gaussian spread) frames.

use log::debug;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};

use crate::error::SimulationError;
use crate::sampling::sample_photon_indices;
use crate::shape::FrameShape;
use crate::speckle::modes::multimode_speckle_field;

/// Normalized 1D Gaussian kernel over a window of `2 * radius + 1` taps.
fn gaussian_kernel_1d(sigma: f64, radius: usize) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(2 * radius + 1);
    let mut sum = 0.0;
    for i in 0..=2 * radius {
        let x = i as f64 - radius as f64;
        let value = (-0.5 * (x / sigma).powi(2)).exp();
        kernel.push(value);
        sum += value;
    }
    for value in &mut kernel {
        *value /= sum;
    }
    kernel
}

/// Half-sample symmetric reflection of an index into `[0, n)`.
///
/// Mirrors without repeating the edge sample (-1 -> 0, -2 -> 1, n -> n-1),
/// so every kernel tap lands in bounds and each photon keeps unit mass.
fn reflect_index(index: isize, n: usize) -> usize {
    let n = n as isize;
    let period = 2 * n;
    let mut i = index % period;
    if i < 0 {
        i += period;
    }
    if i >= n {
        i = period - 1 - i;
    }
    i as usize
}

/// Simulate a speckle photon frame with per-photon charge sharing.
///
/// Builds the multi-mode speckle probability field once, samples the
/// photon positions exactly as the plain sampler would, then deposits
/// each photon as a unit-mass 2D Gaussian of standard deviation `sigma`
/// centered on its pixel instead of a single count. The deposit uses a
/// separable kernel of radius `trunc(4 * sigma + 0.5)` with reflected
/// boundaries, so the frame total still equals the photon budget.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `modes` - Number of independent speckle modes, >= 1
/// * `speckle_size` - Speckle grain size in pixels
/// * `kbar` - Expected photons per pixel
/// * `sigma` - Charge-spread standard deviation in pixels, > 0
/// * `rng_seed` - Optional seed for reproducible results
pub fn charge_sharing_frame(
    shape: FrameShape,
    modes: u32,
    speckle_size: f64,
    kbar: f64,
    sigma: f64,
    rng_seed: Option<u64>,
) -> Result<Array2<f64>, SimulationError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "sigma",
            value: sigma,
        });
    }

    let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let dist = multimode_speckle_field(shape, speckle_size, modes, &mut rng)?;
    let indices = sample_photon_indices(shape, kbar, &dist, &mut rng)?;

    let radius = (4.0 * sigma + 0.5) as usize;
    let kernel = gaussian_kernel_1d(sigma, radius);
    debug!(
        "spreading {} photons with sigma {sigma} (kernel radius {radius})",
        indices.len()
    );

    let (height, width) = shape.dim();
    let mut frame = Array2::<f64>::zeros(shape.dim());
    for index in indices {
        let (row, col) = shape.unflatten_index(index);
        for (di, &kr) in kernel.iter().enumerate() {
            let target_row = reflect_index(row as isize + di as isize - radius as isize, height);
            for (dj, &kc) in kernel.iter().enumerate() {
                let target_col = reflect_index(col as isize + dj as isize - radius as isize, width);
                frame[[target_row, target_col]] += kr * kc;
            }
        }
    }

    Ok(frame)
}
