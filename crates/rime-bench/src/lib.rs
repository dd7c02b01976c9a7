//! Benchmark profiles for the Rime crystal growth simulator.
//!
//! Provides pre-built [`GrowthConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 201x201 lattice (~40K cells), windowed diffusion
//! - [`exact_profile`]: same lattice, full-lattice diffusion every iteration
//! - [`stress_profile`]: 601x601 lattice (~360K cells), windowed diffusion
//! - [`warm_simulation`]: a simulation advanced past its first iterations so
//!   the crystal has a non-trivial frontier

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rime_engine::{ConfigError, GrowthConfig, NullSink, Simulation};
use rime_phases::Coefficients;

/// 201x201 lattice, reference coefficients, diffusion window margin 10.
pub fn reference_profile(iterations: u64) -> GrowthConfig {
    GrowthConfig {
        rows: 201,
        cols: 201,
        seed: None,
        iterations,
        coefficients: Coefficients::default(),
        ambient_steam: 2.0,
        diffusion_window: 10,
        interference_amplitude: 0.0,
        interference_seed: 0,
        snapshot_interval: iterations.max(1),
    }
}

/// [`reference_profile`] with exact (full-lattice) diffusion.
pub fn exact_profile(iterations: u64) -> GrowthConfig {
    GrowthConfig {
        diffusion_window: 0,
        ..reference_profile(iterations)
    }
}

/// 601x601 lattice for stress testing, diffusion window margin 10.
pub fn stress_profile(iterations: u64) -> GrowthConfig {
    GrowthConfig {
        rows: 601,
        cols: 601,
        ..reference_profile(iterations)
    }
}

/// Build `config` and run `warmup` iterations with no snapshots.
///
/// `config.iterations` must exceed `warmup` for the result to be steppable.
pub fn warm_simulation(config: GrowthConfig, warmup: u64) -> Result<Simulation, ConfigError> {
    let mut sim = Simulation::new(config)?;
    for _ in 0..warmup {
        if sim.step(&mut NullSink).is_err() {
            break;
        }
    }
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile(100).validate().is_ok());
        assert!(exact_profile(100).validate().is_ok());
        assert!(stress_profile(100).validate().is_ok());
    }

    #[test]
    fn warm_simulation_advances() {
        let sim = warm_simulation(reference_profile(50), 10).unwrap();
        assert_eq!(sim.state().iteration().0, 10);
        assert!(sim.crystal_count() > 1);
    }
}
