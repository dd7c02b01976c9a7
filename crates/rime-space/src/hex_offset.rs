//! 2D hexagonal lattice in odd-r offset layout.

use crate::error::SpaceError;
use rime_core::Coord;
use smallvec::SmallVec;

/// Neighbour offsets `(drow, dcol)` for cells on even rows.
///
/// Order: W, NW, NE, E, SE, SW.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // W
    (-1, -1), // NW
    (-1, 0),  // NE
    (0, 1),   // E
    (1, 0),   // SE
    (1, -1),  // SW
];

/// Neighbour offsets `(drow, dcol)` for cells on odd rows.
///
/// Order: W, NW, NE, E, SE, SW.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (0, -1), // W
    (-1, 0), // NW
    (-1, 1), // NE
    (0, 1),  // E
    (1, 1),  // SE
    (1, 0),  // SW
];

/// A hexagonal lattice stored on a rectangular `rows x cols` array.
///
/// Each cell has coordinate `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`. Odd rows are shifted half a cell to the right, so
/// the neighbour pattern depends on row parity. Neighbours that fall
/// outside the array are dropped: edge and corner cells have fewer than
/// six neighbours. The clipping is exact, there is no wrap-around.
///
/// Canonical ordering is row-major: outer loop over rows, inner loop over
/// columns. The rank of `(row, col)` is `row * cols + col`.
///
/// # Examples
///
/// ```
/// use rime_core::Coord;
/// use rime_space::HexOffset2D;
///
/// let hex = HexOffset2D::new(5, 5).unwrap();
/// assert_eq!(hex.cell_count(), 25);
///
/// // Interior cell has 6 neighbours.
/// assert_eq!(hex.neighbours(Coord::new(2, 2)).len(), 6);
///
/// // Corner cell has 2 neighbours.
/// assert_eq!(
///     hex.neighbours(Coord::new(0, 0)).as_slice(),
///     &[Coord::new(0, 1), Coord::new(1, 0)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexOffset2D {
    rows: u32,
    cols: u32,
}

impl HexOffset2D {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new hex lattice with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// The central cell, `(rows / 2, cols / 2)`.
    pub fn center(&self) -> Coord {
        Coord::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// `true` if `coord` lies inside the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && coord.row < self.rows as i32
            && coord.col < self.cols as i32
    }

    /// Check that a coordinate is in bounds.
    pub fn check_bounds(&self, coord: Coord) -> Result<Coord, SpaceError> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                bounds: format!("row in [0, {}), col in [0, {})", self.rows, self.cols),
            })
        }
    }

    /// The unclipped neighbour candidates of `coord`, in W, NW, NE, E, SE,
    /// SW order. Some may lie outside the lattice.
    pub fn raw_neighbours(coord: Coord) -> [Coord; 6] {
        let offsets = if coord.is_even_row() {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        offsets.map(|(dr, dc)| Coord::new(coord.row + dr, coord.col + dc))
    }

    /// The in-bounds neighbours of `coord`, in W, NW, NE, E, SE, SW order.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 6]> {
        Self::raw_neighbours(coord)
            .into_iter()
            .filter(|nb| self.contains(*nb))
            .collect()
    }

    /// Position of `coord` in the canonical row-major ordering.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.cols as usize + coord.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`rank`](Self::rank). `rank` must be `< cell_count()`.
    pub fn coord_at(&self, rank: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((rank / cols) as i32, (rank % cols) as i32)
    }

    /// All cells in canonical row-major order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                out.push(Coord::new(row, col));
            }
        }
        out
    }

    /// Hex graph distance between two cells (steps through the unclipped
    /// grid), via conversion to cube coordinates.
    pub fn hex_distance(a: Coord, b: Coord) -> u32 {
        let (aq, ar) = Self::to_axial(a);
        let (bq, br) = Self::to_axial(b);
        let dq = (aq - bq).abs();
        let dr = (ar - br).abs();
        let ds = ((aq + ar) - (bq + br)).abs();
        dq.max(dr).max(ds) as u32
    }

    /// Odd-r offset to axial `(q, r)`.
    fn to_axial(c: Coord) -> (i64, i64) {
        let row = c.row as i64;
        let q = c.col as i64 - (row - row.rem_euclid(2)) / 2;
        (q, row)
    }
}
