//! Border phase: freezing, attachment and melting over the frontier.
//!
//! Every frontier cell is evaluated against the lattice as it stood after
//! diffusion and before any border write. Results are split into two
//! staging buffers; the caller commits both.

use rayon::prelude::*;
use rime_core::{Cell, IterationId};
use rime_lattice::{Lattice, StagedCells};
use rime_space::Topology;

use crate::attachment::{attach, AttachmentRule, NeighbourCensus};
use crate::coefficients::Coefficients;
use crate::freezing::freeze;
use crate::interference::Interference;
use crate::melting::melt;
use crate::PAR_MIN_LEN;

/// Result of the border phase for a single frontier cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellOutcome {
    /// The cell joins the crystal with this value.
    Attached(Cell),
    /// The cell stays outside the crystal with this post-melting value.
    Melted(Cell),
}

/// Staged results of one border pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderOutcome {
    /// New crystal cells.
    pub attached: StagedCells,
    /// Post-melting values of the frontier cells that did not attach.
    pub melted: StagedCells,
}

impl BorderOutcome {
    /// Number of frontier cells processed.
    pub fn len(&self) -> usize {
        self.attached.len() + self.melted.len()
    }

    /// `true` if no frontier cell was processed.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty() && self.melted.is_empty()
    }

    /// Flat indices of the cells that attached.
    pub fn attached_indices(&self) -> Vec<usize> {
        self.attached.indices().collect()
    }
}

impl FromIterator<(usize, CellOutcome)> for BorderOutcome {
    fn from_iter<I: IntoIterator<Item = (usize, CellOutcome)>>(iter: I) -> Self {
        let mut out = Self::default();
        for (idx, outcome) in iter {
            match outcome {
                CellOutcome::Attached(cell) => out.attached.push(idx, cell),
                CellOutcome::Melted(cell) => out.melted.push(idx, cell),
            }
        }
        out
    }
}

/// Applies the per-cell border rules to every frontier cell.
#[derive(Clone, Copy, Debug)]
pub struct BorderProcessor {
    rule: AttachmentRule,
    kappa: f64,
    mu: f64,
    gamma: f64,
    interference: Option<Interference>,
}

impl BorderProcessor {
    /// A processor without interference.
    pub fn new(coefficients: &Coefficients) -> Self {
        Self {
            rule: AttachmentRule::from(coefficients),
            kappa: coefficients.kappa,
            mu: coefficients.mu,
            gamma: coefficients.gamma,
            interference: None,
        }
    }

    /// Perturb the steam of non-attaching cells after melting. An inactive
    /// (zero-amplitude) interference is dropped.
    pub fn with_interference(mut self, interference: Interference) -> Self {
        self.interference = interference.is_active().then_some(interference);
        self
    }

    /// The attachment thresholds in use.
    pub fn rule(&self) -> &AttachmentRule {
        &self.rule
    }

    /// Evaluate frontier cell `idx`.
    ///
    /// Freezes the cell, tests attachment against the unmodified neighbours,
    /// and otherwise melts the frozen value.
    pub fn evaluate(
        &self,
        lattice: &Lattice,
        topology: &Topology,
        idx: usize,
        iteration: IterationId,
    ) -> CellOutcome {
        let frozen = freeze(lattice.at(idx), self.kappa);
        let census = NeighbourCensus::take(lattice, topology, idx);
        if self.rule.attaches(&frozen, &census) {
            return CellOutcome::Attached(attach(&frozen, iteration));
        }
        let melted = melt(&frozen, self.mu, self.gamma);
        match &self.interference {
            Some(noise) => CellOutcome::Melted(noise.perturb(&melted, idx, iteration)),
            None => CellOutcome::Melted(melted),
        }
    }

    /// Evaluate every cell in `frontier`. The lattice is not modified.
    ///
    /// Frontier cells must be distinct and non-crystal.
    pub fn process(
        &self,
        lattice: &Lattice,
        topology: &Topology,
        frontier: &[usize],
        iteration: IterationId,
    ) -> BorderOutcome {
        let outcomes: Vec<(usize, CellOutcome)> = frontier
            .par_iter()
            .with_min_len(PAR_MIN_LEN)
            .map(|&idx| {
                debug_assert!(!lattice.is_crystal(idx), "crystal cell {idx} in frontier");
                (idx, self.evaluate(lattice, topology, idx, iteration))
            })
            .collect();
        outcomes.into_iter().collect()
    }
}
