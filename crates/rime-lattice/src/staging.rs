//! Staging buffers for batched lattice writes.
//!
//! A [`Staged`] buffer collects `(flat index, value)` pairs computed from
//! a read-only view of the lattice. Nothing reaches the lattice until the
//! buffer is committed, so every value in one buffer was computed from the
//! same prior state regardless of the order it was produced in.

use rime_core::Cell;

/// Pending writes keyed by flat cell index.
#[derive(Clone, Debug, PartialEq)]
pub struct Staged<T> {
    writes: Vec<(usize, T)>,
}

/// Pending whole-cell writes (border phase results).
pub type StagedCells = Staged<Cell>;

/// Pending steam-only writes (diffusion results).
pub type StagedSteam = Staged<f64>;

impl<T> Staged<T> {
    /// An empty buffer.
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// An empty buffer with room for `n` writes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            writes: Vec::with_capacity(n),
        }
    }

    /// Stage `value` for cell `idx`.
    pub fn push(&mut self, idx: usize, value: T) {
        self.writes.push((idx, value));
    }

    /// Number of staged writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// `true` if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Staged `(index, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(usize, T)> {
        self.writes.iter()
    }

    /// Staged cell indices in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.writes.iter().map(|(i, _)| *i)
    }

    /// `true` if no index is staged twice.
    pub fn has_unique_indices(&self) -> bool {
        let mut seen: Vec<usize> = self.indices().collect();
        seen.sort_unstable();
        seen.windows(2).all(|w| w[0] != w[1])
    }
}

impl<T> Default for Staged<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(usize, T)> for Staged<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        Self {
            writes: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Staged<T> {
    type Item = (usize, T);
    type IntoIter = std::vec::IntoIter<(usize, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

impl<T> Extend<(usize, T)> for Staged<T> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        self.writes.extend(iter);
    }
}
