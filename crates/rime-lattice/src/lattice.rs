//! The lattice cell store.

use rime_core::{Cell, CellReader, Coord, IterationId};
use rime_space::HexOffset2D;

use crate::error::LatticeError;
use crate::snapshot::LatticeSnapshot;
use crate::staging::{StagedCells, StagedSteam};

/// A `rows x cols` array of [`Cell`]s stored row-major.
///
/// Offers bounded get/set by [`Coord`] and unchecked-by-contract access by
/// flat index for the hot loops. Batched mutation goes through
/// [`commit_steam`](Self::commit_steam) and
/// [`commit_cells`](Self::commit_cells).
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Lattice {
    /// A lattice of non-crystal cells, each holding `ambient_steam`.
    pub fn uniform(space: &HexOffset2D, ambient_steam: f64) -> Self {
        Self {
            rows: space.rows(),
            cols: space.cols(),
            cells: vec![Cell::vapor(ambient_steam); space.cell_count()],
        }
    }

    /// The initial lattice: ambient steam everywhere except a single ice
    /// seed at `seed`.
    pub fn seeded(
        space: &HexOffset2D,
        seed: Coord,
        ambient_steam: f64,
    ) -> Result<Self, LatticeError> {
        let mut lattice = Self::uniform(space, ambient_steam);
        lattice.set(seed, Cell::seed())?;
        Ok(lattice)
    }

    /// Wrap an existing row-major cell buffer.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<Cell>) -> Result<Self, LatticeError> {
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(LatticeError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
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
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a lattice built from a valid [`HexOffset2D`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `coord`, or `None` if out of bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0
            || coord.col < 0
            || coord.row >= self.rows as i32
            || coord.col >= self.cols as i32
        {
            return None;
        }
        Some(coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// Coordinate of flat index `idx`.
    pub fn coord_of(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    fn out_of_bounds(&self, coord: Coord) -> LatticeError {
        LatticeError::CoordOutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<&Cell, LatticeError> {
        let idx = self.index_of(coord).ok_or_else(|| self.out_of_bounds(coord))?;
        Ok(&self.cells[idx])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), LatticeError> {
        let idx = self.index_of(coord).ok_or_else(|| self.out_of_bounds(coord))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// The cell at flat index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// `true` if the cell at flat index `idx` belongs to the crystal.
    pub fn is_crystal(&self, idx: usize) -> bool {
        self.cells[idx].in_crystal
    }

    /// Write every staged steam value. Returns the number of cells written.
    ///
    /// Indices must be distinct and in bounds; crystal cells must not be
    /// staged.
    pub fn commit_steam(&mut self, staged: StagedSteam) -> usize {
        debug_assert!(staged.has_unique_indices(), "steam staged twice for one cell");
        let n = staged.len();
        for (idx, steam) in staged {
            debug_assert!(!self.cells[idx].in_crystal, "diffusion staged a crystal cell");
            self.cells[idx].steam = steam;
        }
        n
    }

    /// Write every staged cell. Returns the number of cells written.
    ///
    /// Indices must be distinct and in bounds; crystal cells must not be
    /// staged, since crystal membership is one-way.
    pub fn commit_cells(&mut self, staged: StagedCells) -> usize {
        debug_assert!(staged.has_unique_indices(), "cell staged twice");
        let n = staged.len();
        for (idx, cell) in staged {
            debug_assert!(!self.cells[idx].in_crystal, "staged write to a crystal cell");
            self.cells[idx] = cell;
        }
        n
    }

    /// Coordinates of all crystal cells in row-major order.
    pub fn crystal_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.in_crystal)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// Sum of `liquid + ice + steam` over every cell.
    pub fn total_water(&self) -> f64 {
        self.cells.iter().map(Cell::total_water).sum()
    }

    /// An owned copy of the current state, tagged with `iteration`.
    pub fn snapshot(&self, iteration: IterationId) -> LatticeSnapshot {
        LatticeSnapshot::new(self.rows, self.cols, self.cells.clone(), iteration)
    }
}

impl CellReader for Lattice {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staging::Staged;

    fn space(rows: u32, cols: u32) -> HexOffset2D {
        HexOffset2D::new(rows, cols).unwrap()
    }

    #[test]
    fn seeded_has_single_crystal_at_seed() {
        let lat = Lattice::seeded(&space(5, 5), Coord::new(2, 2), 1.0).unwrap();
        assert_eq!(lat.crystal_count(), 1);
        assert_eq!(lat.crystal_coords(), vec![Coord::new(2, 2)]);
        let seed = lat.get(Coord::new(2, 2)).unwrap();
        assert_eq!(*seed, Cell::seed());
        for (i, c) in lat.cells().iter().enumerate() {
            if i != 12 {
                assert_eq!(*c, Cell::vapor(1.0));
            }
        }
    }

    #[test]
    fn seeded_rejects_out_of_bounds_seed() {
        let err = Lattice::seeded(&space(3, 3), Coord::new(3, 0), 1.0).unwrap_err();
        assert_eq!(
            err,
            LatticeError::CoordOutOfBounds {
                coord: Coord::new(3, 0),
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    fn get_set_are_bounded() {
        let mut lat = Lattice::uniform(&space(2, 3), 0.5);
        assert!(lat.get(Coord::new(1, 2)).is_ok());
        assert!(lat.get(Coord::new(-1, 0)).is_err());
        assert!(lat.set(Coord::new(0, 3), Cell::seed()).is_err());
        lat.set(Coord::new(1, 0), Cell::seed()).unwrap();
        assert!(lat.is_crystal(3));
    }

    #[test]
    fn from_cells_checks_shape() {
        assert!(Lattice::from_cells(2, 2, vec![Cell::default(); 4]).is_ok());
        assert_eq!(
            Lattice::from_cells(2, 2, vec![Cell::default(); 5]).unwrap_err(),
            LatticeError::ShapeMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn commit_steam_writes_only_staged_cells() {
        let mut lat = Lattice::uniform(&space(2, 2), 1.0);
        let staged: StagedSteam = [(1, 0.25), (3, 0.75)].into_iter().collect();
        assert_eq!(lat.commit_steam(staged), 2);
        let steam: Vec<f64> = lat.cells().iter().map(|c| c.steam).collect();
        assert_eq!(steam, vec![1.0, 0.25, 1.0, 0.75]);
    }

    #[test]
    fn commit_cells_replaces_whole_cells() {
        let mut lat = Lattice::uniform(&space(1, 3), 1.0);
        let mut staged = Staged::new();
        staged.push(2, Cell::seed());
        assert_eq!(lat.commit_cells(staged), 1);
        assert!(lat.is_crystal(2));
        assert!(!lat.is_crystal(0));
    }

    #[test]
    fn index_and_coord_round_trip() {
        let lat = Lattice::uniform(&space(3, 4), 0.0);
        assert_eq!(lat.index_of(Coord::new(2, 1)), Some(9));
        assert_eq!(lat.coord_of(9), Coord::new(2, 1));
        assert_eq!(lat.index_of(Coord::new(0, 4)), None);
    }

    #[test]
    fn total_water_counts_every_phase() {
        let lat = Lattice::seeded(&space(2, 2), Coord::new(0, 0), 2.0).unwrap();
        assert!((lat.total_water() - 7.0).abs() < 1e-12);
    }
}
