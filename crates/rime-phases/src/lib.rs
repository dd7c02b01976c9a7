//! Physical phases of the snowflake growth automaton.
//!
//! Every phase reads a consistent view of the lattice and produces staged
//! writes; none of them mutate the lattice directly.
//!
//! - [`SteamDiffusion`]: Jacobi-style vapour averaging with a no-flux
//!   boundary at the crystal surface
//! - [`BorderProcessor`]: freezing, attachment and melting for every
//!   frontier cell, with optional [`Interference`] noise
//!
//! The per-cell rules ([`freeze`], [`AttachmentRule`], [`melt`]) are exposed
//! individually so they can be tested and composed in isolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attachment;
pub mod border;
pub mod coefficients;
pub mod diffusion;
pub mod freezing;
pub mod interference;
pub mod melting;

pub use attachment::{attach, AttachmentRule, NeighbourCensus};
pub use border::{BorderOutcome, BorderProcessor, CellOutcome};
pub use coefficients::Coefficients;
pub use diffusion::SteamDiffusion;
pub use freezing::freeze;
pub use interference::{Interference, InterferenceBuilder};
pub use melting::melt;

/// Below this many cells a phase runs on the calling thread.
pub(crate) const PAR_MIN_LEN: usize = 256;
