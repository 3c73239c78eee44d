use super::{edit, DistanceTable, EditDistance, SequencePair};
use crate::Cost;

/// Fills the whole [`DistanceTable`] in row-major order.
pub struct BottomUp<'a> {
    pair: SequencePair<'a>,
    table: DistanceTable,
}

impl<'a> BottomUp<'a> {
    pub fn new(pair: SequencePair<'a>) -> Self {
        Self {
            pair,
            table: DistanceTable::new(pair.m(), pair.n()),
        }
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }
}

impl EditDistance for BottomUp<'_> {
    fn calculate_distance(&mut self) -> Cost {
        bottom_up_distance(self.pair, &mut self.table)
    }

    fn calculate_memory(&self) -> u64 {
        self.table.size_in_bytes()
    }
}

/// Computes every cell of `table`, which must be sized for `pair`.
pub fn bottom_up_distance(pair: SequencePair, table: &mut DistanceTable) -> Cost {
    let (a, b) = (pair.s1, pair.s2);
    let (m, n) = (a.len(), b.len());
    assert_eq!(table.rows(), m + 1);
    assert_eq!(table.cols(), n + 1);

    for j in 0..=n {
        table.set(0, j, j as Cost);
    }
    for (i, &ca) in (1..=m).zip(a) {
        table.set(i, 0, i as Cost);
        for (j, &cb) in (1..=n).zip(b) {
            let d = if ca == cb {
                table[(i - 1, j - 1)]
            } else {
                edit(table[(i, j - 1)], table[(i - 1, j)], table[(i - 1, j - 1)])
            };
            table.set(i, j, d);
        }
    }

    table[(m, n)]
}
