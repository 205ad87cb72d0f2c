//! Error types for the simulation pipeline.

use thiserror::Error;

/// Error types for frame simulation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A frame dimension was zero.
    #[error("invalid frame shape {width}x{height}: both dimensions must be positive")]
    InvalidShape { width: usize, height: usize },

    /// The speckle size rounds to an empty phasor grid for this frame.
    #[error(
        "speckle size {speckle_size} rounds to an empty phasor grid for a {width}x{height} frame"
    )]
    DegenerateSpeckleSize {
        speckle_size: f64,
        width: usize,
        height: usize,
    },

    /// A probability field violated the sampler contract (negative,
    /// non-finite, wrong shape, or not normalized).
    #[error("invalid probability distribution: {0}")]
    InvalidDistribution(String),

    /// A scalar simulation parameter was non-finite or out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
