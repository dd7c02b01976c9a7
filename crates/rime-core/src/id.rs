//! Strongly-typed identifiers and the [`Coord`] lattice coordinate.

use std::fmt;

/// Monotonically increasing iteration counter.
///
/// Iteration `0` is the initial state (the seed attaches at iteration 0);
/// the first executed iteration is `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IterationId(pub u64);

impl IterationId {
    /// The iteration that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for IterationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IterationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A `(row, col)` position on the rectangular index space of the lattice.
///
/// Row parity selects which of the two hexagonal offset patterns applies
/// to the cell (see `rime_space::HexOffset2D`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0 <= row < rows`.
    pub row: i32,
    /// Column index, `0 <= col < cols`.
    pub col: i32,
}

impl Coord {
    /// Construct a coordinate from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `true` if the row index is even.
    pub fn is_even_row(&self) -> bool {
        self.row.rem_euclid(2) == 0
    }

    /// Chebyshev distance in offset space: `max(|drow|, |dcol|)`.
    ///
    /// This is the metric the diffusion window is sized with, so a crystal
    /// cell at Chebyshev distance `k` from the seed always lies inside a
    /// window of half-width `k`.
    pub fn chebyshev(&self, other: &Coord) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn iteration_next_increments() {
        assert_eq!(IterationId(0).next(), IterationId(1));
        assert_eq!(IterationId(41).next(), IterationId(42));
    }

    #[test]
    fn row_parity() {
        assert!(Coord::new(0, 3).is_even_row());
        assert!(!Coord::new(1, 3).is_even_row());
        assert!(Coord::new(4, 0).is_even_row());
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        let a = Coord::new(2, 2);
        assert_eq!(a.chebyshev(&a), 0);
        assert_eq!(a.chebyshev(&Coord::new(0, 3)), 2);
        assert_eq!(a.chebyshev(&Coord::new(3, 7)), 5);
    }

    #[test]
    fn display_formats_row_then_col() {
        assert_eq!(Coord::new(3, 9).to_string(), "(3, 9)");
        assert_eq!(IterationId(7).to_string(), "7");
    }

    proptest! {
        #[test]
        fn chebyshev_is_symmetric(
            ar in -50i32..50, ac in -50i32..50,
            br in -50i32..50, bc in -50i32..50,
        ) {
            let a = Coord::new(ar, ac);
            let b = Coord::new(br, bc);
            prop_assert_eq!(a.chebyshev(&b), b.chebyshev(&a));
        }
    }
}
