//! Owned lattice snapshots.

use rime_core::{Cell, CellReader, IterationId};

/// An owned, immutable copy of the lattice at a given iteration.
///
/// Unlike a `&Lattice` borrow, a snapshot can outlive the simulation step
/// that produced it and be moved to another thread, so snapshot consumers
/// can run without holding up the iteration loop.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeSnapshot {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
    iteration: IterationId,
}

// Compile-time assertion: LatticeSnapshot must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<LatticeSnapshot>();
};

impl LatticeSnapshot {
    pub(crate) fn new(rows: u32, cols: u32, cells: Vec<Cell>, iteration: IterationId) -> Self {
        Self {
            rows,
            cols,
            cells,
            iteration,
        }
    }

    /// Iteration at which the snapshot was taken.
    pub fn iteration(&self) -> IterationId {
        self.iteration
    }
}

impl CellReader for LatticeSnapshot {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
