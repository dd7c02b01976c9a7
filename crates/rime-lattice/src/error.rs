//! Lattice-specific error types.

use std::error::Error;
use std::fmt;

use rime_core::Coord;

/// Errors from bounded lattice access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A coordinate outside `[0, rows) x [0, cols)`.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Lattice rows.
        rows: u32,
        /// Lattice columns.
        cols: u32,
    },
    /// A cell buffer whose length does not match `rows * cols`.
    ShapeMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} outside {rows}x{cols} lattice")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for LatticeError {}
