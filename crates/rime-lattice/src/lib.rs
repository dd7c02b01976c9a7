//! Cell storage for Rime simulations.
//!
//! The lattice is a flat row-major `Vec<Cell>`. It performs no mutation
//! coordination of its own: phases compute their effects into staging
//! buffers from a consistent view of the lattice, and the orchestrator
//! commits those buffers in a separate step.
//!
//! ```text
//! Lattice (flat Vec<Cell>, row-major)
//! ├── Staged<f64>   diffusion results, committed via commit_steam()
//! ├── Staged<Cell>  border phase results, committed via commit_cells()
//! └── LatticeSnapshot  owned copy handed to snapshot consumers
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod snapshot;
pub mod staging;

pub use error::LatticeError;
pub use lattice::Lattice;
pub use snapshot::LatticeSnapshot;
pub use staging::{Staged, StagedCells, StagedSteam};
