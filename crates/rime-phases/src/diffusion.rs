//! Jacobi-style steam diffusion.
//!
//! Each non-crystal cell in the window takes the mean of its own steam and
//! its neighbours' steam, all read from the lattice as it stood before the
//! pass. A crystal neighbour contributes the cell's own steam instead of its
//! (zero) value, giving a no-flux boundary at the ice surface.
//!
//! New values are computed into a [`StagedSteam`] buffer and written in one
//! commit, so no cell ever observes a value updated in the same pass.

use rayon::prelude::*;
use rime_lattice::{Lattice, StagedSteam};
use rime_space::{Topology, Window};

use crate::PAR_MIN_LEN;

/// Vapour diffusion over a window of the lattice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SteamDiffusion;

impl SteamDiffusion {
    /// Create a diffusion phase.
    pub fn new() -> Self {
        Self
    }

    /// New steam for non-crystal cell `idx`.
    ///
    /// `(own + sum(neighbour or own if crystal)) / (1 + degree)`
    pub fn diffused_steam(lattice: &Lattice, topology: &Topology, idx: usize) -> f64 {
        let own = lattice.at(idx).steam;
        let nbs = topology.neighbours(idx);
        let acc = nbs.iter().fold(own, |acc, &nb| {
            let n = lattice.at(nb);
            acc + if n.in_crystal { own } else { n.steam }
        });
        acc / (1 + nbs.len()) as f64
    }

    /// Compute new steam for every non-crystal cell in `window` without
    /// modifying the lattice. Entries are in row-major order.
    pub fn stage(&self, lattice: &Lattice, topology: &Topology, window: &Window) -> StagedSteam {
        let cols = topology.cols() as usize;
        let (row_lo, row_hi) = window.rows();
        let (col_lo, col_hi) = window.cols();
        let (col_lo, col_hi) = (col_lo as usize, col_hi as usize);

        let rows: Vec<usize> = (row_lo as usize..=row_hi as usize).collect();
        let min_rows = (PAR_MIN_LEN / (col_hi - col_lo + 1)).max(1);
        let staged: Vec<Vec<(usize, f64)>> = rows
            .par_iter()
            .with_min_len(min_rows)
            .map(|&r| {
                (col_lo..=col_hi)
                    .map(|c| r * cols + c)
                    .filter(|&idx| !lattice.is_crystal(idx))
                    .map(|idx| (idx, Self::diffused_steam(lattice, topology, idx)))
                    .collect()
            })
            .collect();
        staged.into_iter().flatten().collect()
    }

    /// Stage and commit one diffusion pass. Returns the number of cells
    /// recomputed.
    pub fn diffuse(&self, lattice: &mut Lattice, topology: &Topology, window: &Window) -> usize {
        let staged = self.stage(lattice, topology, window);
        lattice.commit_steam(staged)
    }
}
