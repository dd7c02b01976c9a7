//! Lattice fixtures.

use std::collections::BTreeSet;

use rime_core::{Cell, Coord};
use rime_lattice::Lattice;
use rime_space::{HexOffset2D, Topology};

/// A `rows x cols` space and its neighbour table.
///
/// # Panics
///
/// Panics on an empty shape.
pub fn hex(rows: u32, cols: u32) -> (HexOffset2D, Topology) {
    let space = HexOffset2D::new(rows, cols).expect("fixture shape must be non-empty");
    (space, Topology::new(space))
}

/// A lattice with ambient `steam` everywhere except the given crystal
/// cells, which hold the seed value.
pub fn crystal_lattice(rows: u32, cols: u32, crystal: &[Coord], steam: f64) -> (Lattice, Topology) {
    let (space, topo) = hex(rows, cols);
    let mut lattice = Lattice::uniform(&space, steam);
    for &coord in crystal {
        lattice
            .set(coord, Cell::seed())
            .expect("fixture crystal cell out of bounds");
    }
    (lattice, topo)
}

/// Every non-crystal cell with at least one crystal neighbour, found by a
/// full scan.
pub fn expected_frontier(lattice: &Lattice, topology: &Topology) -> BTreeSet<usize> {
    (0..lattice.len())
        .filter(|&i| !lattice.is_crystal(i))
        .filter(|&i| topology.neighbours(i).iter().any(|&nb| lattice.is_crystal(nb)))
        .collect()
}
