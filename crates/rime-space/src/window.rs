//! Clipped axis-aligned bounding boxes.

use rime_core::Coord;

/// An inclusive, axis-aligned rectangle of cells clipped to the lattice.
///
/// Windows are never empty: construction clamps against a lattice with at
/// least one cell, so `row_lo <= row_hi` and `col_lo <= col_hi` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    row_lo: u32,
    row_hi: u32,
    col_lo: u32,
    col_hi: u32,
}

impl Window {
    /// The whole `rows x cols` lattice.
    pub fn full(rows: u32, cols: u32) -> Self {
        Self {
            row_lo: 0,
            row_hi: rows.saturating_sub(1),
            col_lo: 0,
            col_hi: cols.saturating_sub(1),
        }
    }

    /// `[center.row - half_width, center.row + half_width] x [center.col -
    /// half_width, center.col + half_width]`, clipped to the lattice.
    pub fn around(center: Coord, half_width: u32, rows: u32, cols: u32) -> Self {
        let clip = |mid: i32, len: u32| -> (u32, u32) {
            let max = len.saturating_sub(1) as i64;
            let lo = (mid as i64 - half_width as i64).clamp(0, max);
            let hi = (mid as i64 + half_width as i64).clamp(0, max);
            (lo as u32, hi as u32)
        };
        let (row_lo, row_hi) = clip(center.row, rows);
        let (col_lo, col_hi) = clip(center.col, cols);
        Self {
            row_lo,
            row_hi,
            col_lo,
            col_hi,
        }
    }

    /// Inclusive row range.
    pub fn rows(&self) -> (u32, u32) {
        (self.row_lo, self.row_hi)
    }

    /// Inclusive column range.
    pub fn cols(&self) -> (u32, u32) {
        (self.col_lo, self.col_hi)
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        (self.row_hi - self.row_lo + 1) as usize * (self.col_hi - self.col_lo + 1) as usize
    }

    /// `true` if `coord` lies inside the window.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.row_lo as i32
            && coord.row <= self.row_hi as i32
            && coord.col >= self.col_lo as i32
            && coord.col <= self.col_hi as i32
    }

    /// `true` if the window covers the whole `rows x cols` lattice.
    pub fn is_full(&self, rows: u32, cols: u32) -> bool {
        *self == Self::full(rows, cols)
    }

    /// Flat row-major indices of the covered cells, for a lattice `cols`
    /// wide.
    pub fn indices(&self, cols: u32) -> impl Iterator<Item = usize> {
        let cols = cols as usize;
        let (col_lo, col_hi) = (self.col_lo as usize, self.col_hi as usize);
        (self.row_lo..=self.row_hi).flat_map(move |r| {
            let base = r as usize * cols;
            (col_lo..=col_hi).map(move |c| base + c)
        })
    }
}
