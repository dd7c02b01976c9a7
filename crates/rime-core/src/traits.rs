//! Read-only access to lattice cell state.

use crate::cell::Cell;
use crate::id::Coord;

/// Read-only view of a rectangular lattice of cells.
///
/// Implemented by the live lattice and by owned lattice snapshots, so
/// snapshot consumers can be written once against `&dyn CellReader`
/// regardless of whether they run inline or on a worker thread.
pub trait CellReader {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// All cells in row-major order.
    fn cells(&self) -> &[Cell];

    /// The cell at `coord`, or `None` if `coord` is out of bounds.
    fn cell(&self, coord: Coord) -> Option<&Cell> {
        if coord.row < 0
            || coord.col < 0
            || coord.row >= self.rows() as i32
            || coord.col >= self.cols() as i32
        {
            return None;
        }
        let idx = coord.row as usize * self.cols() as usize + coord.col as usize;
        self.cells().get(idx)
    }

    /// Number of cells that belong to the crystal.
    fn crystal_count(&self) -> usize {
        self.cells().iter().filter(|c| c.in_crystal).count()
    }
}
