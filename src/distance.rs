//! The edit distance strategies.
//!
//! All strategies evaluate the same recurrence:
//!
//! ```text
//! D(i, 0) = i
//! D(0, j) = j
//! D(i, j) = D(i-1, j-1)                                  if a[i-1] == b[j-1]
//! D(i, j) = 1 + min(D(i, j-1), D(i-1, j), D(i-1, j-1))   otherwise
//! ```
//!
//! The three terms are an insertion, a deletion, and a substitution.
//! Only the value is computed, never an alignment.

use crate::{counters::CostCounters, Cost, Seq};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

mod bottom_up;
mod memoized;
mod recursive;
mod space_optimized;
mod table;


pub use bottom_up::{bottom_up_distance, BottomUp};
pub use memoized::{memoized_distance, Memoized};
pub use recursive::{recursive_distance, Recursive};
pub use space_optimized::{space_optimized_distance, SpaceOptimized};
pub use table::{DistanceTable, UNKNOWN};

/// The two sequences to compare. `s1` has length `m`, `s2` has length `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencePair<'a> {
    pub s1: Seq<'a>,
    pub s2: Seq<'a>,
}

impl<'a> SequencePair<'a> {
    pub fn new(s1: Seq<'a>, s2: Seq<'a>) -> Self {
        Self { s1, s2 }
    }

    pub fn m(&self) -> usize {
        self.s1.len()
    }

    pub fn n(&self) -> usize {
        self.s2.len()
    }
}

/// An edit distance algorithm bound to one [`SequencePair`].
///
/// Instances are built for a single trial: working memory is sized from the
/// pair when the instance is constructed and released when it is dropped.
pub trait EditDistance {
    /// Computes the distance between the two sequences.
    fn calculate_distance(&mut self) -> Cost;

    /// The modelled memory usage in bytes.
    ///
    /// This is a formula over the table size and the counters of the last
    /// call to [`EditDistance::calculate_distance`], not a measured footprint.
    fn calculate_memory(&self) -> u64;

    /// Counters of the last computation, for the top-down strategies.
    fn counters(&self) -> Option<&CostCounters> {
        None
    }
}

/// The available strategies.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain recursion. Exponential time.
    Recursive,
    /// Top-down recursion with a memo table.
    #[value(name = "memo")]
    Memoized,
    /// Bottom-up dynamic programming over the full table.
    #[value(name = "dp")]
    BottomUp,
    /// Bottom-up dynamic programming keeping two rows.
    #[value(name = "dp-optimized")]
    SpaceOptimized,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::Memoized,
        Strategy::BottomUp,
        Strategy::SpaceOptimized,
    ];

    pub fn build<'a>(&self, pair: SequencePair<'a>) -> Box<dyn EditDistance + 'a> {
        match self {
            Strategy::Recursive => Box::new(Recursive::new(pair)),
            Strategy::Memoized => Box::new(Memoized::new(pair)),
            Strategy::BottomUp => Box::new(BottomUp::new(pair)),
            Strategy::SpaceOptimized => Box::new(SpaceOptimized::new(pair)),
        }
    }

    /// Prefix of the output files of this strategy.
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memo",
            Strategy::BottomUp => "dp",
            Strategy::SpaceOptimized => "dp_optimized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Recursive => "Recursive",
            Strategy::Memoized => "Recursive Memoized",
            Strategy::BottomUp => "Dynamic Programming",
            Strategy::SpaceOptimized => "Dynamic Programming Optimized",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `1 + min(insert, delete, replace)`.
#[inline]
fn edit(insert: Cost, delete: Cost, replace: Cost) -> Cost {
    1 + insert.min(delete).min(replace)
}
