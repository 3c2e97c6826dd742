//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, T, A>(
        x: &nd::ArrayBase<S, nd::Ix1>,
        y: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = A>,
    {
        (x.len() == y.len()).then_some(()).ok_or(Self(x.len(), y.len()))
    }
}

/// Returned when a coordinate array is too short to carry a grid spacing.
#[derive(Debug, Error)]
#[error("coordinate arrays must be at least 2 elements long; got {0}")]
pub struct GridError(pub usize);

impl GridError {
    pub(crate) fn check<S, A>(x: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = x.len();
        (n >= 2).then_some(()).ok_or(Self(n))
    }
}

/// Returned from eigenstate evaluation functions.
#[derive(Debug, Error)]
pub enum QhoError {
    /// Returned when a negative energy level is encountered.
    #[error("energy levels must be non-negative integers; got {0}")]
    BadLevel(i64),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl QhoError {
    pub(crate) fn check_level(n: i64) -> Result<usize, Self> {
        (n >= 0).then_some(n as usize).ok_or(Self::BadLevel(n))
    }
}
