//! Edit distance strategies and the harness that benchmarks them.
//!
//! Four algorithms compute the same (Levenshtein) distance with different
//! time/space trade-offs:
//! - [`Recursive`]: the plain recurrence, exponential time;
//! - [`Memoized`]: top-down recursion over a [`DistanceTable`];
//! - [`BottomUp`]: the full table filled row by row;
//! - [`SpaceOptimized`]: only two rows of the table.
//!
//! [`Harness`] times repeated trials of one strategy over a range of input
//! sizes and reduces them with [`Statistics`] into [`BenchmarkResult`] rows.

pub mod bench;
pub mod cli;
pub mod counters;
pub mod distance;
pub mod error;
pub mod sink;
pub mod stats;
pub mod text;

/// The type of distances and table cells.
///
/// All memory estimates count `size_of::<Cost>()` bytes per cell.
pub type Cost = i32;
/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

pub use bench::{measure, BenchConfig, BenchmarkResult, BenchmarkSample, Harness, Measurement};
pub use counters::CostCounters;
pub use distance::{
    BottomUp, DistanceTable, EditDistance, Memoized, Recursive, SequencePair, SpaceOptimized,
    Strategy,
};
pub use error::{Error, Result};
pub use sink::{CsvSink, ResultSink};
pub use stats::{Quartiles, Statistics};
pub use text::{TextExtractor, TextSource};
