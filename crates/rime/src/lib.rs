//! Rime: a hexagonal cellular-automaton snowflake growth simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Rime sub-crates. For most users, adding `rime` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rime::prelude::*;
//!
//! let config = GrowthConfig {
//!     rows: 31,
//!     cols: 31,
//!     iterations: 20,
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let mut sink = RecordingSink::new();
//! let summary = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(summary.iterations, 20);
//! assert!(summary.crystal_cells > 1);
//! assert_eq!(sink.iterations(), vec![IterationId(20)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rime-core` | Coordinates, iteration IDs, cells, errors, `CellReader` |
//! | [`space`] | `rime-space` | Hex offset lattice, neighbour table, windows |
//! | [`lattice`] | `rime-lattice` | Cell store, staging buffers, owned snapshots |
//! | [`phases`] | `rime-phases` | Diffusion, freezing, attachment, melting, interference |
//! | [`engine`] | `rime-engine` | Configuration, frontier, iteration loop, snapshot sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`rime-core`).
pub use rime_core as types;

/// Hexagonal offset lattice and neighbour tables (`rime-space`).
///
/// [`space::HexOffset2D`] defines adjacency; [`space::Topology`] caches it
/// for a fixed lattice; [`space::Window`] bounds the diffusion region.
pub use rime_space as space;

/// The cell store and its staging buffers (`rime-lattice`).
pub use rime_lattice as lattice;

/// The physical phases (`rime-phases`).
///
/// Use these directly to experiment with a single rule outside the
/// iteration loop.
pub use rime_phases as phases;

/// The simulation engine (`rime-engine`).
///
/// [`engine::Simulation`] runs the iteration loop; [`engine::SnapshotSink`]
/// is the extension point for rendering or persisting lattices.
pub use rime_engine as engine;

/// Common imports for typical Rime usage.
///
/// ```rust
/// use rime::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rime_core::{Cell, CellReader, Coord, IterationId};

    // Errors
    pub use rime_core::{SnapshotError, StepError};
    pub use rime_engine::ConfigError;

    // Lattice
    pub use rime_lattice::{Lattice, LatticeSnapshot};

    // Phases
    pub use rime_phases::Coefficients;

    // Engine
    pub use rime_engine::{
        BackgroundSink, GrowthConfig, NullSink, OwnedSnapshotSink, RecordingSink, RunStatus,
        RunSummary, Simulation, SnapshotSink, StepMetrics, StepReport,
    };
}
