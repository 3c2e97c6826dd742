//! Closed-form evaluation of oscillator eigenstates and their probability
//! densities over coordinate grids.
//!
//! The main entry point is [`evaluate`], which maps an energy level and a
//! coordinate array to the sampled probability density `|ψ[n](x)|²`.
//! [`eigenstate`] returns the full [`Eigenstate`] record instead, holding the
//! energy and the sampled wavefunction.

use std::cmp;
use ndarray as nd;
use crate::{
    Arr1,
    error::{ GridError, QhoError },
    grid::Grid,
    hermite,
};

pub type QhoResult<T> = Result<T, QhoError>;

/// A single stationary state of the oscillator, sampled over a coordinate
/// grid.
///
/// This struct is usually only returned by [`eigenstate`]; you probably won't
/// ever instantiate it yourself. The energy is reported in natural units of
/// `ħω`, in which `e = n + 1/2`.
#[derive(Clone, Debug)]
pub struct Eigenstate {
    /// Energy level
    pub n: usize,
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: nd::Array1<f64>,
}

impl Eigenstate {
    /// Compare two `Eigenstate`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Compute the probability density `|ψ(x)|²` over the sampling grid.
    pub fn density(&self) -> nd::Array1<f64> {
        self.wf.mapv(|pk| pk * pk)
    }
}

/// Evaluate the normalized eigenfunction `ψ[n]` over a coordinate array.
///
/// Fails if `n` is negative or if the array is shorter than 2 elements.
pub fn wavefunction<S>(n: i64, x: &Arr1<S>) -> QhoResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let nu = QhoError::check_level(n)?;
    GridError::check(x)?;
    Ok(x.mapv(|xk| hermite::eigenfunction(nu, xk)))
}

/// Evaluate the probability density `|ψ[n](x)|²` over a coordinate array.
///
/// The returned array matches `x` in length and ordering, and all of its
/// values are finite and non-negative. Fails if `n` is negative or if the
/// array is shorter than 2 elements.
///
/// ```
/// use ndarray as nd;
/// use qho::density::evaluate;
///
/// let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 1000);
/// let density = evaluate(2, &x).unwrap();
/// assert_eq!(density.len(), x.len());
/// assert!(density.iter().all(|dk| dk.is_finite() && *dk >= 0.0));
/// ```
pub fn evaluate<S>(n: i64, x: &Arr1<S>) -> QhoResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let psi = wavefunction(n, x)?;
    Ok(psi.mapv(|pk| pk * pk))
}

/// Evaluate the full [`Eigenstate`] record for level `n` over a grid.
pub fn eigenstate(n: i64, grid: &Grid) -> QhoResult<Eigenstate> {
    let wf = wavefunction(n, grid.get_x())?;
    let nu = n as usize; // n ≥ 0 if the evaluation above succeeded
    Ok(Eigenstate { n: nu, e: nu as f64 + 0.5, wf })
}
