//! The iteration loop.
//!
//! [`Simulation`] is the only component that writes to the lattice. Each
//! [`step()`](Simulation::step) runs the phases in a fixed order, every
//! phase reading one consistent lattice state and staging its writes:
//!
//! ```text
//! diffusion ─ stage ─ commit ─ border ─ stage ─ commit ─ frontier ─ snapshot
//! ```
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] and all mutating methods take `&mut self`. A
//! snapshot sink receives `&Lattice`, so the borrow checker rules out any
//! mutation while a snapshot is being taken.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rime_core::{Coord, IterationId, StepError};
use rime_lattice::Lattice;
use rime_phases::{BorderProcessor, Interference, SteamDiffusion};
use rime_space::{Topology, Window};
use tracing::{debug, info, trace};

use crate::config::{ConfigError, GrowthConfig};
use crate::frontier::Frontier;
use crate::metrics::StepMetrics;
use crate::sink::{should_snapshot, SnapshotSink};

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── RunStatus ───────────────────────────────────────────────────

/// Lifecycle of a run. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Built, no iteration executed yet.
    Initialized,
    /// At least one iteration executed, more remain.
    Running,
    /// The configured number of iterations has been executed.
    Completed,
}

// ── SimulationState ─────────────────────────────────────────────

/// Everything that changes between iterations.
#[derive(Clone, Debug)]
pub struct SimulationState {
    lattice: Lattice,
    frontier: Frontier,
    iteration: IterationId,
    max_extent: u32,
}

impl SimulationState {
    /// The cell store.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Non-crystal cells touching the crystal.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Last executed iteration (`0` before the first step).
    pub fn iteration(&self) -> IterationId {
        self.iteration
    }

    /// Largest Chebyshev distance of any crystal cell from the seed.
    pub fn max_extent(&self) -> u32 {
        self.max_extent
    }
}

// ── Reports ─────────────────────────────────────────────────────

/// Result of one [`Simulation::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The iteration that was executed.
    pub iteration: IterationId,
    /// Cells that joined the crystal, as flat indices.
    pub attached: Vec<usize>,
    /// `true` if the snapshot sink was invoked.
    pub snapshot_taken: bool,
    /// Performance metrics for this iteration.
    pub metrics: StepMetrics,
}

/// Result of running to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations executed.
    pub iterations: u64,
    /// Crystal cells at the end of the run, seed included.
    pub crystal_cells: usize,
    /// Final frontier size.
    pub frontier_len: usize,
    /// Final extent of the crystal around the seed.
    pub max_extent: u32,
    /// Number of times the snapshot sink was invoked.
    pub snapshots: u64,
}

// ── Simulation ──────────────────────────────────────────────────

/// A single snowflake growth run.
#[derive(Debug)]
pub struct Simulation {
    config: GrowthConfig,
    topology: Topology,
    seed: Coord,
    diffusion: SteamDiffusion,
    border: BorderProcessor,
    state: SimulationState,
    status: RunStatus,
    crystal_cells: usize,
    snapshots: u64,
    last_metrics: Option<StepMetrics>,
}

impl Simulation {
    /// Validate `config` and build the initial state: ambient steam
    /// everywhere, a single ice seed, and the seed's neighbours as the
    /// frontier.
    pub fn new(config: GrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = config.space()?;
        let seed = config.resolved_seed(&space);
        let topology = Topology::new(space);
        let lattice = Lattice::seeded(&space, seed, config.ambient_steam)?;
        let frontier = Frontier::from_lattice(&lattice, &topology);

        let mut border = BorderProcessor::new(&config.coefficients);
        if config.interference_amplitude > 0.0 {
            // Amplitude already checked by validate().
            let noise = Interference::builder()
                .amplitude(config.interference_amplitude)
                .seed(config.interference_seed)
                .build()
                .map_err(|_| ConfigError::InvalidInterference {
                    value: config.interference_amplitude,
                })?;
            border = border.with_interference(noise);
        }

        info!(
            rows = config.rows,
            cols = config.cols,
            seed = %seed,
            iterations = config.iterations,
            diffusion_window = config.diffusion_window,
            interference = config.interference_amplitude,
            "simulation initialized"
        );

        Ok(Self {
            config,
            topology,
            seed,
            diffusion: SteamDiffusion::new(),
            border,
            state: SimulationState {
                lattice,
                frontier,
                iteration: IterationId::default(),
                max_extent: 0,
            },
            status: RunStatus::Initialized,
            crystal_cells: 1,
            snapshots: 0,
            last_metrics: None,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// The neighbour table shared by every phase.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The resolved seed position.
    pub fn seed(&self) -> Coord {
        self.seed
    }

    /// Current mutable state (read-only view).
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.state.lattice
    }

    /// Lifecycle position.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Number of crystal cells, seed included.
    pub fn crystal_count(&self) -> usize {
        self.crystal_cells
    }

    /// Metrics of the most recent iteration.
    pub fn last_metrics(&self) -> Option<&StepMetrics> {
        self.last_metrics.as_ref()
    }

    /// The region diffusion will recompute on the next iteration.
    pub fn diffusion_window(&self) -> Window {
        let (rows, cols) = (self.config.rows, self.config.cols);
        match self.config.diffusion_window {
            0 => Window::full(rows, cols),
            margin => Window::around(
                self.seed,
                margin.saturating_add(self.state.max_extent),
                rows,
                cols,
            ),
        }
    }

    /// Execute one iteration.
    ///
    /// # Errors
    ///
    /// [`StepError::Completed`] if every configured iteration has already
    /// run. [`StepError::Snapshot`] if the sink fails; the iteration has
    /// still been committed.
    pub fn step<S>(&mut self, sink: &mut S) -> Result<StepReport, StepError>
    where
        S: SnapshotSink + ?Sized,
    {
        if self.status == RunStatus::Completed {
            return Err(StepError::Completed {
                iterations: self.state.iteration.0,
            });
        }
        self.status = RunStatus::Running;
        let iteration = self.state.iteration.next();
        let mut metrics = StepMetrics::default();
        let step_start = Instant::now();

        // 1. Diffusion.
        let phase_start = Instant::now();
        let window = self.diffusion_window();
        trace!(iteration = iteration.0, ?window, "diffusion window");
        let staged = self
            .diffusion
            .stage(&self.state.lattice, &self.topology, &window);
        metrics.diffused_cells = self.state.lattice.commit_steam(staged);
        metrics.diffusion_us = phase_start.elapsed().as_micros() as u64;

        // 2. Border phase against the post-diffusion lattice.
        let phase_start = Instant::now();
        let frontier = self.state.frontier.to_vec();
        let outcome = self
            .border
            .process(&self.state.lattice, &self.topology, &frontier, iteration);
        metrics.border_cells = frontier.len();
        metrics.border_us = phase_start.elapsed().as_micros() as u64;

        // 3. Commit.
        let phase_start = Instant::now();
        let attached = outcome.attached_indices();
        self.state.lattice.commit_cells(outcome.attached);
        self.state.lattice.commit_cells(outcome.melted);
        self.crystal_cells += attached.len();
        metrics.commit_us = phase_start.elapsed().as_micros() as u64;

        // 4. Extent.
        let lattice = &self.state.lattice;
        let seed = self.seed;
        self.state.max_extent = attached
            .iter()
            .map(|&idx| lattice.coord_of(idx).chebyshev(&seed))
            .fold(self.state.max_extent, u32::max);

        // 5. Frontier.
        let phase_start = Instant::now();
        self.state
            .frontier
            .update(&self.state.lattice, &self.topology, &attached);
        debug_assert_eq!(
            self.state.frontier.verify(&self.state.lattice, &self.topology),
            Ok(()),
            "frontier diverged from lattice at iteration {iteration}"
        );
        metrics.frontier_us = phase_start.elapsed().as_micros() as u64;

        self.state.iteration = iteration;
        if iteration.0 >= self.config.iterations {
            self.status = RunStatus::Completed;
        }

        // 6. Snapshot.
        let snapshot_taken = should_snapshot(
            iteration,
            self.config.snapshot_interval,
            self.config.iterations,
        );
        let mut sink_result = Ok(());
        if snapshot_taken {
            let phase_start = Instant::now();
            sink_result = sink.snapshot(&self.state.lattice, iteration);
            self.snapshots += 1;
            metrics.snapshot_us = phase_start.elapsed().as_micros() as u64;
        }

        metrics.attached = attached.len();
        metrics.frontier_len = self.state.frontier.len();
        metrics.max_extent = self.state.max_extent;
        metrics.total_us = step_start.elapsed().as_micros() as u64;

        debug!(
            iteration = iteration.0,
            attached = metrics.attached,
            frontier = metrics.frontier_len,
            max_extent = metrics.max_extent,
            diffused = metrics.diffused_cells,
            total_us = metrics.total_us,
            "iteration complete"
        );
        if self.status == RunStatus::Completed {
            info!(
                iterations = iteration.0,
                crystal_cells = self.crystal_cells,
                max_extent = self.state.max_extent,
                snapshots = self.snapshots,
                "simulation completed"
            );
        }

        self.last_metrics = Some(metrics.clone());
        sink_result?;
        Ok(StepReport {
            iteration,
            attached,
            snapshot_taken,
            metrics,
        })
    }

    /// Run every remaining iteration.
    pub fn run<S>(&mut self, sink: &mut S) -> Result<RunSummary, StepError>
    where
        S: SnapshotSink + ?Sized,
    {
        while self.status != RunStatus::Completed {
            self.step(sink)?;
        }
        Ok(self.summary())
    }

    /// Run every remaining iteration, checking `cancel` before each one.
    ///
    /// # Errors
    ///
    /// [`StepError::Cancelled`] with the number of executed iterations once
    /// `cancel` is observed set. The lattice is left at an iteration
    /// boundary and the run can be resumed.
    pub fn run_until<S>(
        &mut self,
        sink: &mut S,
        cancel: &AtomicBool,
    ) -> Result<RunSummary, StepError>
    where
        S: SnapshotSink + ?Sized,
    {
        while self.status != RunStatus::Completed {
            if cancel.load(Ordering::Relaxed) {
                info!(iterations = self.state.iteration.0, "simulation cancelled");
                return Err(StepError::Cancelled {
                    iterations: self.state.iteration.0,
                });
            }
            self.step(sink)?;
        }
        Ok(self.summary())
    }

    /// Totals so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            iterations: self.state.iteration.0,
            crystal_cells: self.crystal_cells,
            frontier_len: self.state.frontier.len(),
            max_extent: self.state.max_extent,
            snapshots: self.snapshots,
        }
    }
}
