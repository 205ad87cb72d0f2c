//! Frame dimensions and index mapping utilities.

use std::fmt;

use crate::error::SimulationError;

/// Pixel dimensions of a simulated detector frame.
///
/// Both dimensions are validated at construction, so every `FrameShape`
/// in circulation describes a non-empty grid. Array data produced for a
/// shape uses ndarray's matrix convention: dimension `(height, width)`,
/// index `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameShape {
    width: usize,
    height: usize,
}

impl FrameShape {
    /// Create a new FrameShape.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidShape` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, SimulationError> {
        if width == 0 || height == 0 {
            return Err(SimulationError::InvalidShape { width, height });
        }
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Array dimension tuple `(height, width)` for ndarray allocation.
    pub fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Row-major flat index of a pixel.
    ///
    /// This and [`FrameShape::unflatten_index`] are the single source of
    /// truth for the flatten order used when sampling from a flattened
    /// probability field, so both directions always agree.
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Convert a row-major flat index back to `(row, col)`.
    pub fn unflatten_index(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
