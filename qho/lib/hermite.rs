//! Physicist's Hermite polynomials and the oscillator eigenfunctions built
//! from them.
//!
//! [`hermite`] evaluates the bare polynomials and is exposed for reference and
//! testing; the eigenfunction path in [`eigenfunction`] folds the
//! normalization constant into the recurrence instead, so the `2ⁿ n!` growth
//! of the polynomial values never materializes. See
//! [`docs`][crate::docs#stable-evaluation].

use std::f64::consts::PI;

#[derive(Copy, Clone, Debug)]
struct Window(f64, f64);

impl Window {
    fn push(&mut self, val: f64) { self.0 = self.1; self.1 = val; }
}

/// Evaluate the physicist's Hermite polynomial of degree `n` via the standard
/// three-term recurrence,
/// ```text
/// H[0](x) = 1
/// H[1](x) = 2 x
/// H[k](x) = 2 x H[k - 1](x) - 2 (k - 1) H[k - 2](x)
/// ```
///
/// The recurrence is numerically benign, but the iterates themselves grow
/// factorially with `n` at fixed `x`; expect overflow to infinity for degrees
/// in the mid-hundreds. Prefer [`eigenfunction`] whenever the Gaussian
/// envelope is going to be applied anyway.
pub fn hermite(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0 * x,
        _ => {
            let mut h = Window(1.0, 2.0 * x);
            for k in 2..=n {
                h.push(2.0 * x * h.1 - 2.0 * ((k - 1) as f64) * h.0);
            }
            h.1
        },
    }
}

/// Compute the normalization constant `c(n) = 1 / √(2ⁿ n! √π)` for the
/// `n`-th eigenfunction.
///
/// Evaluated in log space, so the `2ⁿ n!` product is never materialized and
/// the result underflows gracefully rather than passing through `inf`.
pub fn norm(n: usize) -> f64 {
    let ln_fact: f64 = (1..=n).map(|k| (k as f64).ln()).sum();
    (-0.5 * ((n as f64) * std::f64::consts::LN_2 + ln_fact)).exp()
        * PI.powf(-0.25)
}

/// Evaluate the normalized eigenfunction `ψ[n](x)` in natural units.
///
/// The normalization constant is folded into the three-term recurrence,
/// ```text
/// ψ[0](x) = π^(-1/4) e^(-x²/2)
/// ψ[1](x) = √2 x ψ[0](x)
/// ψ[k](x) = √(2/k) x ψ[k - 1](x) - √((k - 1)/k) ψ[k - 2](x)
/// ```
/// so that every iterate is itself a normalized eigenfunction value. All
/// iterates are bounded in magnitude by `π^(-1/4)` ≈ 0.75, for any `n` and
/// `x`.
pub fn eigenfunction(n: usize, x: f64) -> f64 {
    let p0 = PI.powf(-0.25) * (-x * x / 2.0).exp();
    match n {
        0 => p0,
        _ => {
            let mut p = Window(p0, 2.0_f64.sqrt() * x * p0);
            for k in 2..=n {
                let kf = k as f64;
                p.push(
                    (2.0 / kf).sqrt() * x * p.1
                    - ((kf - 1.0) / kf).sqrt() * p.0
                );
            }
            p.1
        },
    }
}
