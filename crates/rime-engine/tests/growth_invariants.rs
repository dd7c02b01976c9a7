//! Invariants checked after every iteration of longer runs.

use proptest::prelude::*;
use rime_core::{CellReader, IterationId};
use rime_engine::{GrowthConfig, NullSink, Simulation};
use rime_phases::Coefficients;
use rime_test_utils::{assert_crystal_superset, assert_frontier_matches};

fn check_run(config: GrowthConfig) {
    let mut sim = Simulation::new(config).unwrap();
    let seed = sim.seed();
    let mut crystal = sim.lattice().crystal_coords();
    let mut extent = 0;

    while sim.status() != rime_engine::RunStatus::Completed {
        let report = sim.step(&mut NullSink).unwrap();
        let lattice = sim.lattice();

        assert_frontier_matches(lattice, sim.topology(), sim.state().frontier().iter());

        let now = lattice.crystal_coords();
        assert_crystal_superset(&crystal, &now);
        assert_eq!(now.len(), crystal.len() + report.attached.len());
        assert_eq!(lattice.crystal_count(), sim.crystal_count());

        assert!(sim.state().max_extent() >= extent);
        extent = sim.state().max_extent();
        let measured = now.iter().map(|c| c.chebyshev(&seed)).max().unwrap_or(0);
        assert_eq!(extent, measured);

        for c in lattice.cells().iter().filter(|c| c.in_crystal) {
            assert_eq!(c.steam, 0.0);
            assert_eq!(c.liquid, 0.0);
            assert!(c.attachment <= report.iteration);
        }
        for &idx in &report.attached {
            assert_eq!(lattice.at(idx).attachment, report.iteration);
        }
        crystal = now;
    }
}

#[test]
fn invariants_hold_on_full_diffusion() {
    check_run(GrowthConfig {
        rows: 31,
        cols: 31,
        iterations: 60,
        ..Default::default()
    });
}

#[test]
fn invariants_hold_with_windowed_diffusion() {
    check_run(GrowthConfig {
        rows: 31,
        cols: 25,
        iterations: 60,
        diffusion_window: 2,
        ..Default::default()
    });
}

#[test]
fn invariants_hold_with_interference() {
    check_run(GrowthConfig {
        rows: 25,
        cols: 25,
        iterations: 40,
        interference_amplitude: 0.3,
        interference_seed: 17,
        ..Default::default()
    });
}

#[test]
fn invariants_hold_with_off_centre_seed() {
    check_run(GrowthConfig {
        rows: 12,
        cols: 9,
        seed: Some(rime_core::Coord::new(0, 8)),
        iterations: 40,
        ..Default::default()
    });
}

#[test]
fn runs_are_deterministic() {
    let config = GrowthConfig {
        rows: 21,
        cols: 21,
        iterations: 30,
        interference_amplitude: 0.2,
        interference_seed: 99,
        ..Default::default()
    };
    let mut a = Simulation::new(config.clone()).unwrap();
    let mut b = Simulation::new(config).unwrap();
    a.run(&mut NullSink).unwrap();
    b.run(&mut NullSink).unwrap();
    assert_eq!(a.lattice(), b.lattice());
    assert_eq!(a.state().iteration(), IterationId(30));
}

#[test]
fn whole_window_matches_exact_diffusion() {
    // A margin larger than the lattice clips to the full lattice.
    let base = GrowthConfig {
        rows: 15,
        cols: 15,
        iterations: 20,
        ..Default::default()
    };
    let mut exact = Simulation::new(base.clone()).unwrap();
    let mut windowed = Simulation::new(GrowthConfig {
        diffusion_window: 100,
        ..base
    })
    .unwrap();
    exact.run(&mut NullSink).unwrap();
    windowed.run(&mut NullSink).unwrap();
    assert_eq!(exact.lattice(), windowed.lattice());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn frontier_consistent_for_random_coefficients(
        alpha in 0.0f64..=1.0,
        beta in 0.0f64..=1.0,
        kappa in 0.0f64..=1.0,
        mu in 0.0f64..=1.0,
        gamma in 0.0f64..=1.0,
        rho in 0.1f64..3.0,
    ) {
        let mut sim = Simulation::new(GrowthConfig {
            rows: 13,
            cols: 13,
            iterations: 15,
            ambient_steam: rho,
            coefficients: Coefficients { alpha, beta, kappa, mu, gamma, ..Default::default() },
            ..Default::default()
        })
        .unwrap();
        for _ in 0..15 {
            sim.step(&mut NullSink).unwrap();
            prop_assert!(sim.state().frontier().verify(sim.lattice(), sim.topology()).is_ok());
        }
    }
}
