//! Timing repeated trials of a strategy over a range of input sizes.

use crate::{
    distance::{BottomUp, EditDistance, Memoized, Recursive, SequencePair, SpaceOptimized, Strategy},
    error::{Error, Result},
    sink::ResultSink,
    stats::{Quartiles, Statistics, MIN_SAMPLES},
    text::TextSource,
    Cost,
};
use log::{debug, trace};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Fewest trials per size accepted by the command line tool.
pub const MIN_RUNS: usize = 32;

/// The sizes to test and the number of trials per size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Trials per size.
    pub runs: usize,
    /// Smallest size.
    pub lower: usize,
    /// Largest size, inclusive.
    pub upper: usize,
    pub step: usize,
    /// Fewest accepted `runs`. Never below the 4 samples quartiles need.
    pub min_runs: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 32,
            lower: 8,
            upper: 2048,
            step: 64,
            min_runs: MIN_RUNS,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        let min = self.min_runs.max(MIN_SAMPLES);
        if self.runs < min {
            return Err(Error::TooFewRuns {
                runs: self.runs,
                min,
            });
        }
        if self.step == 0 || self.lower == 0 || self.upper == 0 {
            return Err(Error::NonPositiveRange);
        }
        if self.lower > self.upper {
            return Err(Error::EmptyRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.runs.checked_mul(self.num_sizes()).is_none() {
            return Err(Error::TooManyTrials {
                runs: self.runs,
                sizes: self.num_sizes(),
            });
        }
        Ok(())
    }

    /// The tested sizes, ascending. Only meaningful for a valid config.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.lower..=self.upper).step_by(self.step.max(1))
    }

    pub fn num_sizes(&self) -> usize {
        (self.upper - self.lower) / self.step + 1
    }

    /// Never overflows for a valid config.
    pub fn total_trials(&self) -> usize {
        self.runs.saturating_mul(self.num_sizes())
    }

    /// The largest size actually tested.
    pub fn last_size(&self) -> usize {
        self.lower + (self.num_sizes() - 1) * self.step
    }
}

/// Elapsed times in nanoseconds, one per trial, for input size `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkSample {
    pub n: usize,
    pub times: Vec<f64>,
}

impl BenchmarkSample {
    pub fn reduce(mut self) -> Result<BenchmarkResult> {
        let Statistics {
            mean,
            stdev,
            quartiles,
        } = Statistics::of(&mut self.times)?;
        Ok(BenchmarkResult {
            n: self.n,
            mean,
            stdev,
            quartiles,
        })
    }
}

/// One output row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub n: usize,
    pub mean: f64,
    pub stdev: f64,
    pub quartiles: Quartiles,
}

/// Runs the trials for a validated [`BenchConfig`].
pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    /// Fails if `config` is invalid. No trial runs before this check.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Times `runs` trials of `strategy` on `pair`.
    ///
    /// `on_trial` is called after every trial.
    pub fn sample(
        &self,
        strategy: Strategy,
        pair: SequencePair,
        mut on_trial: impl FnMut(),
    ) -> BenchmarkSample {
        let times = (0..self.config.runs)
            .map(|i| {
                let t = trial(strategy, pair).as_nanos() as f64;
                trace!("{} n={} trial {i}: {t}ns", strategy.tag(), pair.m());
                on_trial();
                t
            })
            .collect();
        BenchmarkSample {
            n: pair.m(),
            times,
        }
    }

    /// Benchmarks `strategy` on extracts of `a` and `b` for every size.
    ///
    /// Rows are written to `sink` in ascending order of size as soon as they
    /// are done. `progress` receives `(done, total)` trial counts.
    pub fn run(
        &self,
        strategy: Strategy,
        a: &impl TextSource,
        b: &impl TextSource,
        sink: &mut impl ResultSink,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<()> {
        let total = self.config.total_trials();
        let mut done = 0;
        for n in self.config.sizes() {
            let pair = SequencePair::new(a.extract(n)?, b.extract(n)?);
            let sample = self.sample(strategy, pair, || {
                done += 1;
                progress(done, total);
            });
            let result = sample.reduce()?;
            debug!(
                "{} n={n}: mean {:.0}ns median {:.0}ns",
                strategy.tag(),
                result.mean,
                result.quartiles.median()
            );
            sink.write(&result)?;
        }
        sink.flush()
    }
}

/// Times one call to `calculate_distance` on a fresh instance.
///
/// Construction happens before the clock starts and the instance is dropped
/// after it is read.
fn trial(strategy: Strategy, pair: SequencePair) -> Duration {
    fn time(mut algorithm: impl EditDistance) -> Duration {
        let start = Instant::now();
        black_box(algorithm.calculate_distance());
        start.elapsed()
    }
    match strategy {
        Strategy::Recursive => time(Recursive::new(pair)),
        Strategy::Memoized => time(Memoized::new(pair)),
        Strategy::BottomUp => time(BottomUp::new(pair)),
        Strategy::SpaceOptimized => time(SpaceOptimized::new(pair)),
    }
}

/// The result of a single timed computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub distance: Cost,
    pub elapsed: Duration,
    /// Modelled memory, see [`EditDistance::calculate_memory`].
    pub memory_bytes: u64,
}

/// Times one distance computation and reads the memory model afterwards.
pub fn measure<D: EditDistance + ?Sized>(algorithm: &mut D) -> Measurement {
    let start = Instant::now();
    let distance = algorithm.calculate_distance();
    let elapsed = start.elapsed();
    Measurement {
        distance,
        elapsed,
        memory_bytes: algorithm.calculate_memory(),
    }
}
