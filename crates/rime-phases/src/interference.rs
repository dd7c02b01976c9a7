//! Random interference on frontier steam.
//!
//! After melting, each non-attaching frontier cell's steam is scaled by
//! `1 + amplitude` or `1 - amplitude` with equal probability.
//!
//! The draw is deterministic: the RNG is a ChaCha8 stream seeded from
//! `seed XOR iteration` and positioned on a stream selected by the cell's
//! flat index. The outcome therefore depends only on `(seed, iteration,
//! cell)`, never on processing order or thread scheduling.
//!
//! Constructed via the builder pattern: [`Interference::builder`].

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rime_core::{Cell, IterationId};

/// A deterministic steam perturbation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interference {
    amplitude: f64,
    seed: u64,
}

/// Builder for [`Interference`].
pub struct InterferenceBuilder {
    amplitude: f64,
    seed: u64,
}

impl Interference {
    /// Create a new builder (amplitude 0, seed 0).
    pub fn builder() -> InterferenceBuilder {
        InterferenceBuilder {
            amplitude: 0.0,
            seed: 0,
        }
    }

    /// Relative perturbation magnitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Base RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `false` when the amplitude is zero and perturbation is a no-op.
    pub fn is_active(&self) -> bool {
        self.amplitude > 0.0
    }

    /// Perturb the steam of cell `idx` at `iteration`.
    pub fn perturb(&self, cell: &Cell, idx: usize, iteration: IterationId) -> Cell {
        if !self.is_active() {
            return *cell;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ iteration.0);
        rng.set_stream(idx as u64);
        let factor = if rng.random_bool(0.5) {
            1.0 + self.amplitude
        } else {
            1.0 - self.amplitude
        };
        Cell {
            steam: (cell.steam * factor).max(0.0),
            ..*cell
        }
    }
}

impl InterferenceBuilder {
    /// Set the perturbation amplitude (default: 0). Must be finite and >= 0.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the interference step.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `amplitude` is negative or not finite.
    pub fn build(self) -> Result<Interference, String> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(format!(
                "amplitude must be finite and >= 0, got {}",
                self.amplitude
            ));
        }
        Ok(Interference {
            amplitude: self.amplitude,
            seed: self.seed,
        })
    }
}
