use super::{edit, EditDistance, SequencePair};
use crate::Cost;
use std::mem::{size_of, swap};

/// Bottom-up dynamic programming keeping only the previous and current row.
///
/// Memory is `2 (n + 1)` cells, independent of `m`.
pub struct SpaceOptimized<'a> {
    pair: SequencePair<'a>,
    prev: Vec<Cost>,
    curr: Vec<Cost>,
}

impl<'a> SpaceOptimized<'a> {
    pub fn new(pair: SequencePair<'a>) -> Self {
        Self {
            pair,
            prev: vec![0; pair.n() + 1],
            curr: vec![0; pair.n() + 1],
        }
    }
}

impl EditDistance for SpaceOptimized<'_> {
    fn calculate_distance(&mut self) -> Cost {
        space_optimized_distance(self.pair, &mut self.prev, &mut self.curr)
    }

    fn calculate_memory(&self) -> u64 {
        ((self.prev.len() + self.curr.len()) * size_of::<Cost>()) as u64
    }
}

/// Computes the distance with two rolling rows of length `n + 1`.
///
/// On return `prev` holds the last row of the table.
pub fn space_optimized_distance(
    pair: SequencePair,
    prev: &mut Vec<Cost>,
    curr: &mut Vec<Cost>,
) -> Cost {
    let (a, b) = (pair.s1, pair.s2);
    let n = b.len();
    assert_eq!(prev.len(), n + 1);
    assert_eq!(curr.len(), n + 1);

    for (j, d) in prev.iter_mut().enumerate() {
        *d = j as Cost;
    }
    for (i, &ca) in (1..).zip(a) {
        curr[0] = i;
        for (j, &cb) in (1..=n).zip(b) {
            curr[j] = if ca == cb {
                prev[j - 1]
            } else {
                edit(curr[j - 1], prev[j], prev[j - 1])
            };
        }
        // `prev` now holds row i.
        swap(prev, curr);
    }

    prev[n]
}
