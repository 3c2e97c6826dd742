//! Checks of the physical invariants that display front ends rely on.

use ndarray as nd;
use qho::{
    density::{ eigenstate, evaluate, wavefunction },
    error::QhoError,
    grid::Grid,
    peaks::{ find_peaks, DEF_THRESHOLD },
    utils::{ trapz, wf_dot, wf_norm },
};

#[test]
fn densities_match_the_grid_and_stay_finite_and_non_negative() {
    let grid = Grid::default();
    for n in 0..=10 {
        let density = evaluate(n, grid.get_x()).unwrap();
        assert_eq!(
            density.len(), grid.len(),
            "length mismatch for n={}", n,
        );
        for (k, dk) in density.iter().enumerate() {
            assert!(
                dk.is_finite(),
                "non-finite density for n={} at sample {}: {}", n, k, dk,
            );
            assert!(
                *dk >= 0.0,
                "negative density for n={} at sample {}: {}", n, k, dk,
            );
        }
    }
}

#[test]
fn densities_integrate_to_one_over_the_display_domain() {
    let grid = Grid::default();
    let dx = grid.get_dx();
    for n in 0..=5 {
        let density = evaluate(n, grid.get_x()).unwrap();
        let norm = trapz(&density, dx);
        let err = (norm - 1.0).abs();
        assert!(
            err <= 1e-2,
            "normalization failed for n={}: integral={} err={}", n, norm, err,
        );
    }
    // the ground state is far from the window edge; its truncation deficit is
    // below the integration error
    let d0 = evaluate(0, grid.get_x()).unwrap();
    assert!((trapz(&d0, dx) - 1.0).abs() <= 1e-6);
}

#[test]
fn wavefunction_norms_are_close_to_one() {
    let grid = Grid::default();
    let dx = grid.get_dx();
    for n in [1, 4, 5] {
        let psi = wavefunction(n, grid.get_x()).unwrap();
        let norm = wf_norm(&psi, dx);
        assert!(
            (norm - 1.0).abs() <= 1e-2,
            "wavefunction norm failed for n={}: norm={}", n, norm,
        );
    }
}

#[test]
fn peak_count_is_level_plus_one() {
    let grid = Grid::default();
    for n in 0..=10 {
        let density = evaluate(n, grid.get_x()).unwrap();
        let peaks = find_peaks(grid.get_x(), &density, DEF_THRESHOLD).unwrap();
        assert_eq!(
            peaks.len(), n as usize + 1,
            "peak count mismatch for n={}: found peaks at {:?}",
            n, peaks.iter().map(|pk| pk.x).collect::<Vec<f64>>(),
        );
    }
}

#[test]
fn peaks_lie_in_the_classically_allowed_region() {
    let grid = Grid::default();
    for n in 0..=10 {
        let density = evaluate(n, grid.get_x()).unwrap();
        let peaks = find_peaks(grid.get_x(), &density, DEF_THRESHOLD).unwrap();
        let turning_point = (2.0 * n as f64 + 1.0).sqrt();
        for pk in peaks {
            assert!(
                pk.x.abs() < turning_point,
                "peak outside the allowed region for n={}: x={} (tp={})",
                n, pk.x, turning_point,
            );
        }
    }
}

#[test]
fn the_ground_state_is_a_single_gaussian_centered_at_zero() {
    let grid = Grid::default();
    let density = evaluate(0, grid.get_x()).unwrap();
    let peaks = find_peaks(grid.get_x(), &density, DEF_THRESHOLD).unwrap();
    assert_eq!(peaks.len(), 1);
    // the even-sized grid straddles x = 0, so the maximal sample sits within
    // one spacing of the origin rather than exactly on it
    assert!(peaks[0].x.abs() < grid.get_dx());

    // single-peaked means monotone on either side of the maximal sample
    let m = density.iter().enumerate()
        .max_by(|(_, dl), (_, dr)| dl.partial_cmp(dr).unwrap())
        .map(|(k, _)| k)
        .unwrap();
    let rising = density.iter().take(m)
        .zip(density.iter().take(m).skip(1))
        .all(|(dl, dr)| dl <= dr);
    let falling = density.iter().skip(m)
        .zip(density.iter().skip(m + 1))
        .all(|(dl, dr)| dl >= dr);
    assert!(rising && falling, "ground-state density is not single-peaked");

    // and the tails are numerically negligible at the window edge
    assert!(density[0] < 1e-9);
    assert!(density[grid.len() - 1] < 1e-9);
}

#[test]
fn negative_levels_fail_with_bad_level() {
    let grid = Grid::default();
    match evaluate(-1, grid.get_x()) {
        Err(QhoError::BadLevel(n)) => assert_eq!(n, -1),
        other => panic!("expected BadLevel(-1), got {:?}", other),
    }
}

#[test]
fn evaluation_is_deterministic() {
    let grid = Grid::default();
    for n in [0, 3, 10] {
        let first = evaluate(n, grid.get_x()).unwrap();
        let second = evaluate(n, grid.get_x()).unwrap();
        assert_eq!(first, second, "repeat evaluation differs for n={}", n);
    }
}

#[test]
fn eigenfunctions_have_definite_parity() {
    let grid = Grid::default();
    let x = grid.get_x();
    let x_mirror = x.mapv(|xk| -xk);
    for n in 0..=10 {
        let psi = wavefunction(n, x).unwrap();
        let psi_mirror = wavefunction(n, &x_mirror).unwrap();
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(
            psi_mirror, sign * &psi,
            "parity violated for n={}", n,
        );
    }
}

#[test]
fn eigenfunctions_are_mutually_orthogonal() {
    let grid = Grid::default();
    let dx = grid.get_dx();
    let pairs = [(0_i64, 1_i64), (0, 2), (1, 3), (2, 5), (4, 5), (9, 10)];
    for (na, nb) in pairs {
        let pa = wavefunction(na, grid.get_x()).unwrap();
        let pb = wavefunction(nb, grid.get_x()).unwrap();
        let overlap = wf_dot(&pa, &pb, dx);
        assert!(
            overlap.abs() <= 1e-6,
            "orthogonality failed for ({}, {}): overlap={}", na, nb, overlap,
        );
    }
}

#[test]
fn energies_are_half_integers_in_natural_units() {
    let grid = Grid::default();
    for n in 0..=10_i64 {
        let state = eigenstate(n, &grid).unwrap();
        assert_eq!(state.e, n as f64 + 0.5, "energy mismatch for n={}", n);
        assert_eq!(state.wf.len(), grid.len());
    }
}
