//! Detection of local maxima in sampled curves.
//!
//! The probability density of the level-`n` eigenstate carries exactly
//! `n + 1` local maxima; [`find_peaks`] recovers them from the sampled curve
//! rather than trusting the analytic count, so display code can report what
//! is actually drawn.

use ndarray as nd;
use crate::{
    Arr1,
    density::QhoResult,
    error::{ GridError, LengthError },
};

/// Default curve value below which maxima are ignored.
pub const DEF_THRESHOLD: f64 = 1e-6;

/// A single local maximum of a sampled curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Peak {
    /// Coordinate of the maximal sample.
    pub x: f64,
    /// Curve value at the maximal sample.
    pub y: f64,
}

/// Find all local maxima of `y` over the coordinates `x` with curve values
/// greater than `threshold`.
///
/// A sample counts as a maximum when it strictly exceeds its left neighbor
/// and is at least as large as its right neighbor. The asymmetric tie rule
/// keeps exactly one sample from the two-sample plateau that an even function
/// produces on a symmetric grid with an even number of points; samples at
/// either end of the array are never counted. Fails if the arrays differ in
/// length or are shorter than 2 elements.
pub fn find_peaks<S, T>(x: &Arr1<S>, y: &Arr1<T>, threshold: f64)
    -> QhoResult<Vec<Peak>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, y)?;
    GridError::check(x)?;
    let peaks: Vec<Peak>
        = y.iter().zip(y.iter().skip(1)).zip(y.iter().skip(2))
        .zip(x.iter().skip(1))
        .filter(|(((ykm1, yk), ykp1), _)| {
            *ykm1 < *yk && *yk >= *ykp1 && **yk > threshold
        })
        .map(|(((_, yk), _), xk)| Peak { x: *xk, y: *yk })
        .collect();
    Ok(peaks)
}
