//! Spatial topology for Rime simulations.
//!
//! The lattice is a rectangular `rows x cols` index space read as a
//! hexagonal grid in "odd-r" offset layout: odd rows sit half a cell to
//! the right, so the six neighbours of a cell depend on its row parity.
//!
//! - [`HexOffset2D`]: bounds, row-parity neighbour rule, canonical ordering
//! - [`Topology`]: the neighbour table, precomputed once per lattice
//! - [`Window`]: clipped axis-aligned bounding boxes for windowed diffusion

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex_offset;
pub mod topology;
pub mod window;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use hex_offset::HexOffset2D;
pub use topology::Topology;
pub use window::Window;
