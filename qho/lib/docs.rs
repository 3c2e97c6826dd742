//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Stable evaluation](#stable-evaluation)
//! - [Density structure](#density-structure)
//! - [Truncation](#truncation)
//!
//! # Background
//! The quantum harmonic oscillator is described by the one-dimensional
//! time-independent Schrödinger equation (TISE) for a quadratic potential,
//! ```text
//!   ħ² ∂²ψ   m ω²
//! - -- --- + ---- x² ψ(x) = E ψ(x)
//!   2m ∂x²    2
//! ```
//! with *m* the particle mass and *ω* the angular frequency of the associated
//! classical oscillator. Unlike most potentials, this equation does not have
//! to be attacked numerically: its eigenpairs are known in closed form[^1],
//! ```text
//! E[n] = ħ ω (n + 1/2), n ∊ {0, 1, 2, ...}
//!
//!               1
//! ψ[n](x) = ---------- H[n](x) e^(-x²/2)
//!           √(2ⁿn!√π)
//! ```
//! where *H*\[*n*\] is the physicist's Hermite polynomial of degree *n*,
//! generated by the three-term recurrence
//! ```text
//! H[0](x) = 1
//! H[1](x) = 2 x
//! H[k](x) = 2 x H[k - 1](x) - 2 (k - 1) H[k - 2](x)
//! ```
//! The energies are discrete and evenly spaced; each level adds one quantum
//! *ħω* and one additional node to the wavefunction. Since the Hamiltonian is
//! Hermitian and the potential binds all states, every eigenfunction can be
//! (and here, is) taken real-valued.
//!
//! # Units
//! All coordinates in this crate are expressed in units of the oscillator
//! length and all energies in units of the level spacing,
//! ```text
//! x → x / √(ħ / m ω)
//! E → E / ħ ω
//! ```
//! which removes *ħ*, *m*, and *ω* from the TISE entirely. In these natural
//! units the eigenfunctions take the form given above with no free
//! parameters, and *E*\[*n*\] = *n* + 1/2.
//!
//! # Stable evaluation
//! Evaluating ψ\[*n*\] literally (polynomial, factorial, and Gaussian as
//! separate factors) works fine for small *n* but fails well before the
//! physics does: the polynomial values and the 2ⁿ*n*!√π normalizer both grow
//! factorially, overflowing `f64` for *n* in the low hundreds even though
//! their ratio stays of order one. The evaluation path used by
//! [`eigenfunction`][crate::hermite::eigenfunction] instead folds the
//! normalization constant into the recurrence. Writing
//! *c*(*n*) = 1/√(2ⁿ*n*!√π) and substituting
//! *c*(*k*) = *c*(*k* - 1)/√(2 *k*) into the Hermite recurrence gives
//! ```text
//! ψ[0](x) = π^(-1/4) e^(-x²/2)
//! ψ[1](x) = √2 x ψ[0](x)
//! ψ[k](x) = √(2/k) x ψ[k - 1](x) - √((k - 1)/k) ψ[k - 2](x)
//! ```
//! Every iterate of this recurrence is itself a normalized eigenfunction
//! value, and normalized eigenfunction values are uniformly bounded in
//! magnitude by ψ\[0\](0) = π^(-1/4), so no intermediate can overflow for any
//! *n* or *x*. The bare constant *c*(*n*) is still exposed for reference via
//! [`norm`][crate::hermite::norm], where it is computed in log space,
//! ```text
//! c(n) = exp(-(n ln 2 + Σ{k ≤ n} ln k) / 2) π^(-1/4)
//! ```
//! so the factorial product never materializes there either.
//!
//! # Density structure
//! The probability density |ψ\[*n*\](*x*)|² inherits its structure from the
//! node theorem: ψ\[*n*\] crosses zero exactly *n* times, so its square
//! touches zero at those *n* points and rises to a local maximum between each
//! consecutive pair, as well as between the outermost nodes and the decaying
//! tails. The density of the level-*n* state therefore carries exactly
//! *n* + 1 local maxima; the usual reading is that a higher level offers the
//! particle more distinct likely locations[^2]. All maxima lie inside the
//! classically allowed region |*x*| < √(2 *n* + 1); outside of it the density
//! decays like a Gaussian.
//!
//! The evaluation functions here return the sampled density as computed, with
//! no renormalization pass: the analytic normalization is already folded into
//! the recurrence, and rescaling by a numerically integrated norm would only
//! add noise on the order of the integration error.
//!
//! # Truncation
//! Display front ends sample a fixed window, *x* ∊ \[-5, 5\] with 1000 points
//! by convention here, rather than a window adapted to the level. The window
//! contains the classically allowed region for every level up to *n* = 12
//! (√(2 · 12 + 1) = 5), so all maxima of all displayable levels are always in
//! frame, but the Gaussian tails are cut off at the window edge. The integral
//! of the sampled density over the window is therefore slightly *below* 1,
//! by an amount that grows with *n* as the turning points approach the edge:
//! numerically exact for the ground state, and still within 1% through
//! *n* = 10. The trapezoidal rule itself contributes essentially nothing to
//! that deficit: for smooth integrands decaying to zero at the boundary it
//! converges far faster than its generic *O*(*δx*²) bound[^3].
//!
//! [^1]: M. Abramowitz and I. A. Stegun, "Handbook of Mathematical
//! Functions," Ch. 22 (Dover, 1972).
//!
//! [^2]: D. J. Griffiths and D. F. Schroeter, "Introduction to Quantum
//! Mechanics," 3rd ed., §2.3 (Cambridge University Press, 2018).
//!
//! [^3]: L. N. Trefethen and J. A. C. Weideman, "The exponentially convergent
//! trapezoidal rule." SIAM Review **56** 3 385-458 (2014).
