//! Speckle probability-field synthesis.
//!
//! The random-phasor speckle model (Goodman, *Speckle Phenomena in
//! Optics*, appendix G): a grid of unit-magnitude phasors with
//! independent uniform phases is Fourier-propagated to the far field,
//! and the squared magnitude of the result is an exponentially
//! distributed intensity pattern whose correlation length is set by the
//! phasor grid coarseness. Summing several independent realizations
//! models partial coherence and lowers the contrast.

pub mod field;
pub mod modes;
pub mod phasor;

pub use field::speckle_field;
pub use modes::multimode_speckle_field;
pub use phasor::random_phasor_field;
