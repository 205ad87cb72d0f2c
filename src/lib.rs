//! Synthetic photon-counting detector frames of laser speckle.
//!
//! This crate simulates 2D photon-count images of partially-coherent
//! speckle illumination for detector and imaging-algorithm test data:
//! random-phasor speckle fields synthesized by Fourier propagation,
//! contrast control through incoherent mode summation, categorical
//! photon sampling with shot-noise statistics, and secondary detector
//! effects (flat-field shot noise, Gaussian read noise, per-photon
//! charge sharing).
//!
//! All entry points are pure functions over a [`FrameShape`] and scalar
//! parameters; randomness is explicit through either a seed argument or
//! a caller-owned `StdRng`.

pub mod error;
pub mod noise;
pub mod pipeline;
pub mod sampling;
pub mod shape;
pub mod speckle;

// Re-exports for easier access
pub use error::SimulationError;
pub use noise::charge_sharing::charge_sharing_frame;
pub use noise::gaussian::gaussian_noise_frame;
pub use noise::shot::shot_noise_frame;
pub use pipeline::simulate_speckle_frame;
pub use sampling::{photon_budget, sample_photon_frame, sample_photon_indices};
pub use shape::FrameShape;
pub use speckle::field::speckle_field;
pub use speckle::modes::multimode_speckle_field;
pub use speckle::phasor::random_phasor_field;
