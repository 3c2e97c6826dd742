//! The coordinate grid over which eigenstates are sampled.

use ndarray as nd;
use crate::{
    density::{ self, QhoResult },
    error::GridError,
};

/// Left endpoint of the default display domain.
pub const DEF_XMIN: f64 = -5.0;
/// Right endpoint of the default display domain.
pub const DEF_XMAX: f64 = 5.0;
/// Number of samples in the default grid.
pub const DEF_NX: usize = 1000;

/// Simple record to keep track of a coordinate array.
///
/// Arrays borrowed from this type are guaranteed to be sampled (or generated)
/// for uniform spacing. [`Grid::default`] gives the canonical display domain:
/// [`DEF_NX`] evenly spaced samples from [`DEF_XMIN`] to [`DEF_XMAX`],
/// endpoints included. The domain is held fixed across energy levels; see
/// [truncation][crate::docs#truncation] for the associated caveat.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    ///
    /// *Panics if the number of points is less than 2*.
    pub fn new_linspace(start: f64, stop: f64, n: usize) -> Self {
        let x: nd::Array1<f64> = nd::Array1::linspace(start, stop, n);
        let dx = x[1] - x[0];
        Self { x, dx, n }
    }

    /// Create a new `Grid` from "range-style" arguments (start, exclusive end,
    /// and a step size).
    pub fn new_range(start: f64, stop: f64, step: f64) -> Self {
        let x: nd::Array1<f64> = nd::Array1::range(start, stop, step);
        let n = x.len();
        Self { x, dx: step, n }
    }

    /// Create a new `Grid` from a bare coordinate array, which must be at
    /// least 2 elements long.
    ///
    /// Uniform spacing is assumed and taken from the first pair of elements.
    pub fn from_array(x: nd::Array1<f64>) -> QhoResult<Self> {
        GridError::check(&x)?;
        let dx = x[1] - x[0];
        let n = x.len();
        Ok(Self { x, dx, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`evaluate`][crate::density::evaluate].
    pub fn evaluate(&self, n: i64) -> QhoResult<nd::Array1<f64>> {
        density::evaluate(n, &self.x)
    }
}

impl Default for Grid {
    fn default() -> Self { Self::new_linspace(DEF_XMIN, DEF_XMAX, DEF_NX) }
}
