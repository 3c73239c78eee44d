use super::{edit, EditDistance, SequencePair};
use crate::{counters::CostCounters, Cost, Seq};

/// Evaluates the recurrence directly, without any caching.
///
/// Takes `O(3^(m+n))` time. The call depth is at most `m + n`.
pub struct Recursive<'a> {
    pair: SequencePair<'a>,
    counters: CostCounters,
}

impl<'a> Recursive<'a> {
    pub fn new(pair: SequencePair<'a>) -> Self {
        Self {
            pair,
            counters: CostCounters::new(),
        }
    }
}

impl EditDistance for Recursive<'_> {
    fn calculate_distance(&mut self) -> Cost {
        self.counters.reset();
        recursive_distance(self.pair, &mut self.counters)
    }

    fn calculate_memory(&self) -> u64 {
        self.counters.stack_bytes()
    }

    fn counters(&self) -> Option<&CostCounters> {
        Some(&self.counters)
    }
}

/// Edit distance by plain recursion, recording every call in `counters`.
pub fn recursive_distance(pair: SequencePair, counters: &mut CostCounters) -> Cost {
    distance(pair.s1, pair.s2, pair.m(), pair.n(), counters)
}

fn distance(a: Seq, b: Seq, i: usize, j: usize, counters: &mut CostCounters) -> Cost {
    counters.enter();
    let d = if i == 0 {
        j as Cost
    } else if j == 0 {
        i as Cost
    } else if a[i - 1] == b[j - 1] {
        distance(a, b, i - 1, j - 1, counters)
    } else {
        edit(
            distance(a, b, i, j - 1, counters),
            distance(a, b, i - 1, j, counters),
            distance(a, b, i - 1, j - 1, counters),
        )
    };
    counters.leave();
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::FRAME_BYTES;

    fn run(a: &str, b: &str) -> (Cost, CostCounters) {
        let mut r = Recursive::new(SequencePair::new(a.as_bytes(), b.as_bytes()));
        let d = r.calculate_distance();
        (d, *r.counters().unwrap())
    }

    #[test]
    fn base_cases_are_single_calls() {
        let (d, c) = run("", "abc");
        assert_eq!(d, 3);
        assert_eq!(c.calls, 1);
        assert_eq!(c.max_depth, 1);
    }

    #[test]
    fn matching_prefix_recurses_diagonally() {
        // Every character matches, so the recursion is one chain of length 4.
        let (d, c) = run("abc", "abc");
        assert_eq!(d, 0);
        assert_eq!(c.calls, 4);
        assert_eq!(c.max_depth, 4);
        assert_eq!(c.depth, 0);
    }

    #[test]
    fn one_mismatch_branches_three_ways() {
        // D(1,1) on a mismatch calls D(1,0), D(0,1), D(0,0).
        let (d, c) = run("a", "b");
        assert_eq!(d, 1);
        assert_eq!(c.calls, 4);
        assert_eq!(c.max_depth, 2);
    }

    #[test]
    fn memory_is_max_depth_frames() {
        let mut r = Recursive::new(SequencePair::new(b"sun", b"sat"));
        assert_eq!(r.calculate_memory(), 0);
        r.calculate_distance();
        assert_eq!(
            r.calculate_memory(),
            r.counters().unwrap().max_depth * FRAME_BYTES
        );
    }

    #[test]
    fn counters_reset_between_calls() {
        let mut r = Recursive::new(SequencePair::new(b"ab", b"ba"));
        r.calculate_distance();
        let first = *r.counters().unwrap();
        r.calculate_distance();
        assert_eq!(first, *r.counters().unwrap());
    }
}
