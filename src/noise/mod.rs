//! Secondary noise and detector-effect models.
//!
//! - **shot**: flat-field illumination with pure counting statistics
//! - **gaussian**: additive Gaussian detector read noise
//! - **charge_sharing**: per-photon Gaussian charge spread

pub mod charge_sharing;
pub mod gaussian;
pub mod shot;

pub use charge_sharing::charge_sharing_frame;
pub use gaussian::gaussian_noise_frame;
pub use shot::shot_noise_frame;
