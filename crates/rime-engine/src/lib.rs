//! Simulation engine for hexagonal snowflake growth.
//!
//! [`Simulation`] owns the lattice, the neighbour table and the frontier,
//! and advances them one iteration at a time:
//!
//! 1. diffuse steam over the whole lattice or the growth window
//! 2. freeze, test attachment and melt every frontier cell
//! 3. commit the staged results
//! 4. extend the crystal's extent and update the frontier
//! 5. hand the lattice to a [`SnapshotSink`] on the configured cadence
//!
//! Configuration is validated once in [`Simulation::new`]; no phase can
//! fail afterwards. The only mid-run errors come from snapshot sinks and
//! from stepping a completed or cancelled run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frontier;
pub mod metrics;
pub mod simulation;
pub mod sink;

pub use config::{ConfigError, GrowthConfig};
pub use frontier::{Frontier, FrontierDelta};
pub use metrics::StepMetrics;
pub use simulation::{RunStatus, RunSummary, Simulation, SimulationState, StepReport};
pub use sink::{
    should_snapshot, BackgroundReport, BackgroundSink, NullSink, OwnedSnapshotSink,
    RecordingSink, SnapshotSink,
};
