//! The frontier: non-crystal cells touching the crystal.
//!
//! Maintained incrementally from the cells that attach each iteration, so
//! the cost of an update is proportional to the number of attachments
//! rather than to the lattice size. [`Frontier::verify`] re-derives the set
//! by brute force for debug assertions and tests.

use indexmap::IndexSet;
use rime_lattice::Lattice;
use rime_space::Topology;

/// Cells added to and removed from the frontier by one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontierDelta {
    /// Cells that joined the frontier.
    pub added: usize,
    /// Cells that left the frontier (by attaching).
    pub removed: usize,
}

/// Set of flat indices of non-crystal cells with at least one crystal
/// neighbour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    cells: IndexSet<usize>,
}

impl Frontier {
    /// Derive the frontier of `lattice` with a full scan.
    pub fn from_lattice(lattice: &Lattice, topology: &Topology) -> Self {
        let cells = (0..lattice.len())
            .filter(|&i| Self::belongs(lattice, topology, i))
            .collect();
        Self { cells }
    }

    fn belongs(lattice: &Lattice, topology: &Topology, idx: usize) -> bool {
        !lattice.is_crystal(idx)
            && topology
                .neighbours(idx)
                .iter()
                .any(|&nb| lattice.is_crystal(nb))
    }

    /// Number of frontier cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cell borders the crystal.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `idx` is on the frontier.
    pub fn contains(&self, idx: usize) -> bool {
        self.cells.contains(&idx)
    }

    /// Frontier cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    /// Frontier cells as an owned list, for handing to a parallel phase.
    pub fn to_vec(&self) -> Vec<usize> {
        self.cells.iter().copied().collect()
    }

    /// Apply the attachments of one iteration.
    ///
    /// `lattice` must already hold the committed attachments. Each attached
    /// cell leaves the frontier and each of its non-crystal neighbours
    /// joins it; re-adding a present cell is a no-op.
    pub fn update(
        &mut self,
        lattice: &Lattice,
        topology: &Topology,
        attached: &[usize],
    ) -> FrontierDelta {
        let mut delta = FrontierDelta::default();
        for &idx in attached {
            if self.cells.swap_remove(&idx) {
                delta.removed += 1;
            }
        }
        for &idx in attached {
            for &nb in topology.neighbours(idx) {
                if !lattice.is_crystal(nb) && self.cells.insert(nb) {
                    delta.added += 1;
                }
            }
        }
        delta
    }

    /// Check the frontier against a full scan of `lattice`.
    ///
    /// Returns the first cell whose membership is wrong.
    pub fn verify(&self, lattice: &Lattice, topology: &Topology) -> Result<(), usize> {
        if let Some(&stray) = self.cells.iter().find(|&&i| i >= lattice.len()) {
            return Err(stray);
        }
        let wrong = (0..lattice.len())
            .find(|&i| Self::belongs(lattice, topology, i) != self.contains(i));
        match wrong {
            Some(idx) => Err(idx),
            None => Ok(()),
        }
    }
}
