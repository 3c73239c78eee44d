use super::{edit, DistanceTable, EditDistance, SequencePair};
use crate::{counters::CostCounters, Cost};

/// Top-down recursion that caches every subproblem in a [`DistanceTable`].
///
/// The recursion runs on an explicit stack of frames rather than the native
/// call stack, since its depth grows to `m + n` and long extracts would
/// overflow the thread stack. Calls, depth and evaluation order are exactly
/// those of the recursive formulation.
pub struct Memoized<'a> {
    pair: SequencePair<'a>,
    table: DistanceTable,
    counters: CostCounters,
}

impl<'a> Memoized<'a> {
    pub fn new(pair: SequencePair<'a>) -> Self {
        Self {
            pair,
            table: DistanceTable::new(pair.m(), pair.n()),
            counters: CostCounters::new(),
        }
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }
}

impl EditDistance for Memoized<'_> {
    fn calculate_distance(&mut self) -> Cost {
        self.counters.reset();
        memoized_distance(self.pair, &mut self.table, &mut self.counters)
    }

    fn calculate_memory(&self) -> u64 {
        self.table.size_in_bytes() + self.counters.stack_bytes()
    }

    fn counters(&self) -> Option<&CostCounters> {
        Some(&self.counters)
    }
}

/// A pending call `D(i, j)`. `next` is the index of the next subproblem to
/// call; `0` means the frame was just entered.
#[derive(Clone, Copy)]
struct Frame {
    i: usize,
    j: usize,
    next: usize,
}

impl Frame {
    fn new(i: usize, j: usize) -> Self {
        Self { i, j, next: 0 }
    }
}

/// The `k`'th subproblem that `D(i, j)` calls, for `i, j > 0`.
///
/// On a match only the diagonal is needed. Otherwise: insert, delete, replace.
fn subproblem(i: usize, j: usize, matched: bool, k: usize) -> Option<(usize, usize)> {
    match (matched, k) {
        (true, 0) => Some((i - 1, j - 1)),
        (false, 0) => Some((i, j - 1)),
        (false, 1) => Some((i - 1, j)),
        (false, 2) => Some((i - 1, j - 1)),
        _ => None,
    }
}

/// Memoized edit distance. Cells already present in `table` are reused.
///
/// `table` must be sized for `pair`.
pub fn memoized_distance(
    pair: SequencePair,
    table: &mut DistanceTable,
    counters: &mut CostCounters,
) -> Cost {
    let (a, b) = (pair.s1, pair.s2);
    assert_eq!(table.rows(), a.len() + 1);
    assert_eq!(table.cols(), b.len() + 1);

    let mut stack = vec![Frame::new(a.len(), b.len())];
    counters.enter();

    while let Some(top) = stack.last_mut() {
        let Frame { i, j, next } = *top;

        // Cache hit: return immediately.
        if next == 0 && table.known(i, j).is_some() {
            stack.pop();
            counters.leave();
            continue;
        }

        if i == 0 || j == 0 {
            table.set(i, j, (i + j) as Cost);
            stack.pop();
            counters.leave();
            continue;
        }

        let matched = a[i - 1] == b[j - 1];
        if let Some((ci, cj)) = subproblem(i, j, matched, next) {
            top.next += 1;
            stack.push(Frame::new(ci, cj));
            counters.enter();
            continue;
        }

        // All subproblems have returned.
        let d = if matched {
            table[(i - 1, j - 1)]
        } else {
            edit(table[(i, j - 1)], table[(i - 1, j)], table[(i - 1, j - 1)])
        };
        table.set(i, j, d);
        stack.pop();
        counters.leave();
    }

    table[(a.len(), b.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{counters::FRAME_BYTES, distance::UNKNOWN, Seq};
    use std::mem::size_of;

    /// The memoized recursion on the native stack, for comparing counters.
    fn native(
        a: Seq,
        b: Seq,
        i: usize,
        j: usize,
        t: &mut DistanceTable,
        c: &mut CostCounters,
    ) -> Cost {
        c.enter();
        let d = match t.known(i, j) {
            Some(d) => d,
            None => {
                let d = if i == 0 || j == 0 {
                    (i + j) as Cost
                } else if a[i - 1] == b[j - 1] {
                    native(a, b, i - 1, j - 1, t, c)
                } else {
                    let ins = native(a, b, i, j - 1, t, c);
                    let del = native(a, b, i - 1, j, t, c);
                    let rep = native(a, b, i - 1, j - 1, t, c);
                    edit(ins, del, rep)
                };
                t.set(i, j, d);
                d
            }
        };
        c.leave();
        d
    }

    #[test]
    fn same_counters_as_native_recursion() {
        for (a, b) in [
            ("horse", "ros"),
            ("kitten", "sitting"),
            ("", "abc"),
            ("intention", "execution"),
            ("aaaa", "aaaa"),
            ("abcdef", "fedcba"),
        ] {
            let (a, b) = (a.as_bytes(), b.as_bytes());
            let mut t = DistanceTable::new(a.len(), b.len());
            let mut c = CostCounters::new();
            let expected = native(a, b, a.len(), b.len(), &mut t, &mut c);

            let mut memo = Memoized::new(SequencePair::new(a, b));
            assert_eq!(memo.calculate_distance(), expected);
            assert_eq!(*memo.counters().unwrap(), c, "{a:?} {b:?}");
        }
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        // Depth m + n is far beyond what the 2MB test thread stack allows natively.
        let a = vec![b'a'; 30_000];
        let b = vec![b'b'; 100];
        let mut memo = Memoized::new(SequencePair::new(&a, &b));
        assert_eq!(memo.calculate_distance(), 30_000);
        assert_eq!(memo.counters().unwrap().max_depth, 30_100);
    }

    #[test]
    fn memory_is_table_plus_frames() {
        let mut memo = Memoized::new(SequencePair::new(b"horse", b"ros"));
        let table_bytes = (6 * 4 * size_of::<Cost>()) as u64;
        assert_eq!(memo.calculate_memory(), table_bytes);
        memo.calculate_distance();
        let depth = memo.counters().unwrap().max_depth;
        assert!(depth > 0);
        assert_eq!(memo.calculate_memory(), table_bytes + depth * FRAME_BYTES);
    }

    #[test]
    fn computed_cells_are_bounded() {
        let (a, b) = (b"saturday".as_slice(), b"sunday".as_slice());
        let mut memo = Memoized::new(SequencePair::new(a, b));
        memo.calculate_distance();
        let t = memo.table();
        for i in 0..t.rows() {
            for j in 0..t.cols() {
                let d = t[(i, j)];
                assert!(d == UNKNOWN || (0..=i.max(j) as Cost).contains(&d));
            }
        }
    }
}
