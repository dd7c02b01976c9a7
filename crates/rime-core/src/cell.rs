//! The per-cell state record.

use crate::id::IterationId;

/// State of a single lattice cell.
///
/// A fixed-layout record stored by value in a flat row-major array.
/// `attachment` is always present but only meaningful once `in_crystal`
/// is `true`.
///
/// Crystal membership is a one-way transition: once a cell attaches,
/// no phase ever mutates it again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// `true` once the cell is permanently part of the crystal.
    pub in_crystal: bool,
    /// Fraction of quasi-liquid water (`b`).
    pub liquid: f64,
    /// Fraction of ice (`c`).
    pub ice: f64,
    /// Quantity of water vapour (`d`). Non-negative, unbounded above.
    pub steam: f64,
    /// Iteration at which the cell joined the crystal.
    pub attachment: IterationId,
}

impl Cell {
    /// A non-crystal cell holding only ambient steam.
    pub fn vapor(steam: f64) -> Self {
        Self {
            in_crystal: false,
            liquid: 0.0,
            ice: 0.0,
            steam,
            attachment: IterationId(0),
        }
    }

    /// The initial crystal seed: pure ice, attached at iteration 0.
    pub fn seed() -> Self {
        Self {
            in_crystal: true,
            liquid: 0.0,
            ice: 1.0,
            steam: 0.0,
            attachment: IterationId(0),
        }
    }

    /// Total water held by the cell across all three phases.
    pub fn total_water(&self) -> f64 {
        self.liquid + self.ice + self.steam
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::vapor(0.0)
    }
}
