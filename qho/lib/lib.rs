//! Provides functions and higher-level constructs for closed-form evaluation
//! of quantum harmonic oscillator eigenstates and their probability densities
//! over one-dimensional coordinate grids, expressed throughout in the
//! oscillator's natural units.
//!
//! Provides implementations for the following:
//! - Physicist's Hermite polynomials via the standard three-term recurrence
//! - Normalized eigenfunctions via a normalization-folded recurrence that
//!   stays bounded at every energy level
//! - Probability densities sampled over uniform coordinate [grids][grid],
//!   matching the grid in length and ordering with all values finite and
//!   non-negative
//! - Detection of the *n* + 1 density [maxima][peaks] of the level-*n* state
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod hermite;
pub mod density;
pub mod peaks;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
