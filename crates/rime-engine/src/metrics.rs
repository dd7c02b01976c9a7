//! Per-iteration performance metrics.
//!
//! [`StepMetrics`] captures phase timings and work counts for a single
//! iteration, for logging and profiling.

/// Timing and work counts collected during a single iteration.
///
/// All durations are in microseconds. The simulation populates these
/// fields after each `step()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire iteration, in microseconds.
    pub total_us: u64,
    /// Time spent staging and committing diffusion, in microseconds.
    pub diffusion_us: u64,
    /// Time spent evaluating frontier cells, in microseconds.
    pub border_us: u64,
    /// Time spent committing border results, in microseconds.
    pub commit_us: u64,
    /// Time spent updating the frontier, in microseconds.
    pub frontier_us: u64,
    /// Time spent in the snapshot sink, in microseconds (0 when no
    /// snapshot was due).
    pub snapshot_us: u64,
    /// Number of cells whose steam was recomputed.
    pub diffused_cells: usize,
    /// Number of frontier cells evaluated.
    pub border_cells: usize,
    /// Number of cells that joined the crystal.
    pub attached: usize,
    /// Frontier size after the update.
    pub frontier_len: usize,
    /// Largest Chebyshev distance of any crystal cell from the seed.
    pub max_extent: u32,
}
