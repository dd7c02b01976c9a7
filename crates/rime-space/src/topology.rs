//! Precomputed neighbour table.
//!
//! Adjacency on a fixed-size lattice never changes, so it is computed once
//! at setup into a compressed adjacency arena (one offsets array, one flat
//! neighbour array) and shared by reference with every phase.

use crate::hex_offset::HexOffset2D;
use rime_core::Coord;

/// Dense neighbour lookup keyed by flat cell index.
///
/// `neighbours(i)` yields the flat indices of the in-bounds neighbours of
/// cell `i`, in the same W, NW, NE, E, SE, SW order as
/// [`HexOffset2D::neighbours`].
#[derive(Debug, Clone)]
pub struct Topology {
    space: HexOffset2D,
    /// `offsets[i]..offsets[i + 1]` is the slice of `targets` for cell `i`.
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Topology {
    /// Build the neighbour table for `space`.
    pub fn new(space: HexOffset2D) -> Self {
        let n = space.cell_count();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::with_capacity(n * 6);
        offsets.push(0);
        for coord in space.canonical_ordering() {
            for nb in space.neighbours(coord) {
                // In bounds by construction of `neighbours`.
                if let Some(rank) = space.rank(nb) {
                    targets.push(rank);
                }
            }
            offsets.push(targets.len());
        }
        Self {
            space,
            offsets,
            targets,
        }
    }

    /// The lattice shape this table was built for.
    pub fn space(&self) -> &HexOffset2D {
        &self.space
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.space.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.space.cols()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Flat indices of the neighbours of cell `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    pub fn neighbours(&self, idx: usize) -> &[usize] {
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Number of neighbours of cell `idx`.
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Largest degree of any cell (6 for lattices of at least 3x3).
    pub fn max_degree(&self) -> usize {
        (0..self.cell_count())
            .map(|i| self.degree(i))
            .max()
            .unwrap_or(0)
    }

    /// Flat index of `coord`, or `None` if out of bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.space.rank(coord)
    }

    /// Coordinate of flat index `idx`.
    pub fn coord_of(&self, idx: usize) -> Coord {
        self.space.coord_at(idx)
    }
}
