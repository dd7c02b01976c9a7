//! Core types and traits for the Rime crystal growth simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by every other crate in the
//! workspace: lattice coordinates, iteration identifiers, the per-cell
//! state record, error types, and the read-only cell access trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::Cell;
pub use error::{SnapshotError, StepError};
pub use id::{Coord, IterationId};
pub use traits::CellReader;
