//! Additive Gaussian detector-noise frames.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::SimulationError;
use crate::shape::FrameShape;

/// Generate a frame of i.i.d. Gaussian read noise.
///
/// Each pixel is an independent draw from `Normal(noise_mu, noise_sigma)`.
/// The output is real-valued, not photon counts; it models additive
/// detector read noise on top of whatever signal the caller combines it
/// with. `noise_sigma = 0` is the degenerate-variance boundary and
/// yields a frame of exactly `noise_mu` everywhere.
///
/// # Arguments
/// * `shape` - Frame dimensions
/// * `noise_mu` - Mean of the noise distribution
/// * `noise_sigma` - Standard deviation of the noise distribution, >= 0
/// * `rng_seed` - Optional seed for reproducible results
pub fn gaussian_noise_frame(
    shape: FrameShape,
    noise_mu: f64,
    noise_sigma: f64,
    rng_seed: Option<u64>,
) -> Result<Array2<f64>, SimulationError> {
    if !noise_mu.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name: "noise_mu",
            value: noise_mu,
        });
    }
    // rand_distr's Normal only rejects non-finite sigma, so the sign
    // check has to happen here
    if !noise_sigma.is_finite() || noise_sigma < 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "noise_sigma",
            value: noise_sigma,
        });
    }
    let normal =
        Normal::new(noise_mu, noise_sigma).map_err(|_| SimulationError::InvalidParameter {
            name: "noise_sigma",
            value: noise_sigma,
        })?;

    let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
    let mut rng = StdRng::seed_from_u64(rng_seed);

    Ok(Array2::from_shape_fn(shape.dim(), |_| {
        normal.sample(&mut rng)
    }))
}
