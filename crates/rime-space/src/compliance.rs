//! Lattice topology compliance test helpers.
//!
//! These functions verify that a [`HexOffset2D`] and the [`Topology`]
//! built from it satisfy the invariants the simulation relies on. Reused
//! across the hex lattice and topology test modules.

use crate::hex_offset::HexOffset2D;
use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &HexOffset2D) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord) {
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds, distinct, and one hex step away.
pub fn assert_neighbours_adjacent(space: &HexOffset2D) {
    for coord in space.canonical_ordering() {
        let nbs = space.neighbours(coord);
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {coord}");
        for nb in nbs {
            assert!(space.contains(nb), "{nb} (neighbour of {coord}) out of bounds");
            assert_eq!(
                HexOffset2D::hex_distance(coord, nb),
                1,
                "{nb} is listed as a neighbour of {coord} but is not adjacent"
            );
        }
    }
}

/// Assert that clipping drops exactly the out-of-bounds candidates.
pub fn assert_clipping_exact(space: &HexOffset2D) {
    for coord in space.canonical_ordering() {
        let expected = HexOffset2D::raw_neighbours(coord)
            .into_iter()
            .filter(|nb| space.contains(*nb))
            .count();
        assert_eq!(space.neighbours(coord).len(), expected);
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique,
/// correctly ranked coords.
pub fn assert_canonical_ordering_complete(space: &HexOffset2D) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(space.rank(*coord), Some(i));
        assert_eq!(space.coord_at(i), *coord);
    }
}

/// Assert that the precomputed table matches the on-the-fly rule, in order.
pub fn assert_table_matches_rule(space: &HexOffset2D) {
    let topo = Topology::new(*space);
    for (i, coord) in space.canonical_ordering().into_iter().enumerate() {
        let from_table: Vec<_> = topo
            .neighbours(i)
            .iter()
            .map(|&n| space.coord_at(n))
            .collect();
        let from_rule: Vec<_> = space.neighbours(coord).into_iter().collect();
        assert_eq!(from_table, from_rule, "table mismatch at {coord}");
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(space: &HexOffset2D) {
    assert_neighbours_symmetric(space);
    assert_neighbours_adjacent(space);
    assert_clipping_exact(space);
    assert_canonical_ordering_complete(space);
    assert_table_matches_rule(space);
}
