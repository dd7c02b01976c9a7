//! Reference scenarios run through the public API.

use rime_core::{Cell, CellReader, Coord, IterationId};
use rime_engine::{GrowthConfig, NullSink, RecordingSink, RunStatus, Simulation};
use rime_test_utils::assert_frontier_matches;

fn reference_config(iterations: u64) -> GrowthConfig {
    GrowthConfig {
        rows: 5,
        cols: 5,
        seed: Some(Coord::new(2, 2)),
        iterations,
        ambient_steam: 1.0,
        diffusion_window: 0,
        ..Default::default()
    }
}

// ── 5x5 reference lattice ───────────────────────────────────────

#[test]
fn initial_frontier_is_clipped_seed_neighbourhood() {
    let sim = Simulation::new(reference_config(1)).unwrap();
    let mut frontier: Vec<usize> = sim.state().frontier().iter().collect();
    frontier.sort_unstable();
    assert_eq!(frontier, vec![6, 7, 11, 13, 16, 17]);
    assert_eq!(*sim.lattice().get(Coord::new(2, 2)).unwrap(), Cell::seed());
}

#[test]
fn first_iteration_attaches_nothing() {
    let mut sim = Simulation::new(reference_config(1)).unwrap();
    let before: Vec<usize> = sim.state().frontier().iter().collect();

    let report = sim.step(&mut NullSink).unwrap();

    assert_eq!(report.iteration, IterationId(1));
    assert!(report.attached.is_empty());
    assert_eq!(sim.crystal_count(), 1);
    assert_eq!(sim.state().max_extent(), 0);
    let after: Vec<usize> = sim.state().frontier().iter().collect();
    assert_eq!(before, after);
    assert_eq!(sim.status(), RunStatus::Completed);
}

#[test]
fn first_iteration_melts_frontier_cells() {
    let mut sim = Simulation::new(reference_config(1)).unwrap();
    sim.step(&mut NullSink).unwrap();
    for idx in sim.state().frontier().iter() {
        let c = sim.lattice().at(idx);
        assert!((c.steam - 0.5).abs() < 1e-12, "steam {}", c.steam);
        assert!((c.liquid - 0.2).abs() < 1e-12);
        assert!((c.ice - 0.3).abs() < 1e-12);
    }
    // Cells away from the crystal only diffused.
    let corner = sim.lattice().get(Coord::new(0, 0)).unwrap();
    assert!((corner.steam - 1.0).abs() < 1e-12);
    assert_eq!(corner.liquid, 0.0);
}

#[test]
fn water_is_conserved_while_nothing_attaches() {
    let mut sim = Simulation::new(reference_config(3)).unwrap();
    let before = sim.lattice().total_water();
    let report = sim.step(&mut NullSink).unwrap();
    assert!(report.attached.is_empty());
    assert!((sim.lattice().total_water() - before).abs() < 1e-9);
}

// ── Snapshot cadence ────────────────────────────────────────────

#[test]
fn snapshots_follow_cadence_and_final_iteration() {
    let mut sim = Simulation::new(GrowthConfig {
        rows: 15,
        cols: 15,
        iterations: 25,
        snapshot_interval: 10,
        ..Default::default()
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    let summary = sim.run(&mut sink).unwrap();
    assert_eq!(
        sink.iterations(),
        vec![IterationId(10), IterationId(20), IterationId(25)]
    );
    assert_eq!(summary.snapshots, 3);
    assert_eq!(summary.iterations, 25);
}

#[test]
fn default_cadence_snapshots_once_for_short_runs() {
    let mut sim = Simulation::new(reference_config(7)).unwrap();
    let mut sink = RecordingSink::new();
    sim.run(&mut sink).unwrap();
    assert_eq!(sink.iterations(), vec![IterationId(7)]);
    let last = &sink.snapshots()[0];
    assert_eq!(last.crystal_count(), sim.crystal_count());
}

// ── Growth with the reference steam density ─────────────────────

#[test]
fn dense_vapour_grows_a_symmetric_first_ring() {
    let mut sim = Simulation::new(GrowthConfig {
        rows: 11,
        cols: 11,
        iterations: 1,
        ..Default::default()
    })
    .unwrap();
    let report = sim.step(&mut NullSink).unwrap();
    assert_eq!(report.attached.len(), 6);
    assert_eq!(sim.crystal_count(), 7);
    assert_eq!(sim.state().max_extent(), 1);
    for &idx in &report.attached {
        assert_eq!(sim.lattice().at(idx).attachment, IterationId(1));
    }
    assert_frontier_matches(sim.lattice(), sim.topology(), sim.state().frontier().iter());
}
