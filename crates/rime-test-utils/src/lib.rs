//! Test fixtures and invariant assertions for Rime development.
//!
//! [`fixtures`] builds small lattices with a chosen crystal shape;
//! [`assertions`] checks the structural invariants every phase must
//! preserve by brute force, independently of the incremental bookkeeping
//! the engine uses.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_crystal_superset, assert_frontier_matches};
pub use fixtures::{crystal_lattice, expected_frontier, hex};
