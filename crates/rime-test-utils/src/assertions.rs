//! Brute-force invariant checks with readable failure messages.

use std::collections::BTreeSet;

use rime_core::Coord;
use rime_lattice::Lattice;
use rime_space::Topology;

use crate::fixtures::expected_frontier;

/// Assert that `frontier` is exactly the set of non-crystal cells with a
/// crystal neighbour.
///
/// # Panics
///
/// Panics listing the missing and spurious cells as coordinates.
pub fn assert_frontier_matches<I>(lattice: &Lattice, topology: &Topology, frontier: I)
where
    I: IntoIterator<Item = usize>,
{
    let actual: BTreeSet<usize> = frontier.into_iter().collect();
    let expected = expected_frontier(lattice, topology);
    if actual == expected {
        return;
    }
    let missing: Vec<Coord> = expected
        .difference(&actual)
        .map(|&i| lattice.coord_of(i))
        .collect();
    let spurious: Vec<Coord> = actual
        .difference(&expected)
        .map(|&i| lattice.coord_of(i))
        .collect();
    panic!("frontier mismatch: missing {missing:?}, spurious {spurious:?}");
}

/// Assert that every coordinate in `before` is still present in `after`.
///
/// # Panics
///
/// Panics listing the coordinates that left the crystal.
pub fn assert_crystal_superset(before: &[Coord], after: &[Coord]) {
    let after: BTreeSet<Coord> = after.iter().copied().collect();
    let lost: Vec<Coord> = before
        .iter()
        .filter(|c| !after.contains(c))
        .copied()
        .collect();
    assert!(lost.is_empty(), "crystal cells lost: {lost:?}");
}
