use crate::Cost;
use std::{
    mem::size_of,
    ops::{Index, IndexMut},
};

/// Marks a cell that has not been computed yet.
pub const UNKNOWN: Cost = -1;

/// The `(m+1) x (n+1)` grid of prefix distances, stored row-major.
///
/// Cell `(i, j)` holds the distance between `s1[..i]` and `s2[..j]`, or
/// [`UNKNOWN`]. A computed value is never overwritten by a different one.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    width: usize,
    cells: Vec<Cost>,
}

impl DistanceTable {
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            width: n + 1,
            cells: vec![UNKNOWN; (m + 1) * (n + 1)],
        }
    }

    /// Number of rows, `m + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Number of columns, `n + 1`.
    pub fn cols(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn size_in_bytes(&self) -> u64 {
        (self.cells.len() * size_of::<Cost>()) as u64
    }

    /// The value of cell `(i, j)` if it was computed.
    #[inline]
    pub fn known(&self, i: usize, j: usize) -> Option<Cost> {
        match self[(i, j)] {
            UNKNOWN => None,
            d => Some(d),
        }
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, d: Cost) {
        debug_assert!(d >= 0, "negative distance {d} at ({i}, {j})");
        let cell = &mut self[(i, j)];
        debug_assert!(
            *cell == UNKNOWN || *cell == d,
            "cell ({i}, {j}) changed from {} to {d}",
            *cell
        );
        *cell = d;
    }
}

impl Index<(usize, usize)> for DistanceTable {
    type Output = Cost;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        assert!(j < self.width, "column {j} out of bounds");
        &self.cells[i * self.width + j]
    }
}

impl IndexMut<(usize, usize)> for DistanceTable {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Cost {
        assert!(j < self.width, "column {j} out of bounds");
        &mut self.cells[i * self.width + j]
    }
}
