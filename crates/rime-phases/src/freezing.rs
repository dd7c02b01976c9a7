//! Freezing: local vapour condenses into liquid and ice.

use rime_core::Cell;

/// Condense all of the cell's steam: a `kappa` fraction becomes ice, the
/// rest becomes quasi-liquid water.
///
/// `liquid += (1 - kappa) * steam; ice += kappa * steam; steam = 0`
pub fn freeze(cell: &Cell, kappa: f64) -> Cell {
    Cell {
        liquid: cell.liquid + (1.0 - kappa) * cell.steam,
        ice: cell.ice + kappa * cell.steam,
        steam: 0.0,
        ..*cell
    }
}
