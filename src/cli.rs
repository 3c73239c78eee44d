use crate::{bench::BenchConfig, distance::Strategy};
use clap::{error::ErrorKind, value_parser, CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::{ffi::OsString, path::PathBuf};

/// Benchmark edit distance algorithms on extracts of text files.
///
/// For every strategy and every ordered pair of distinct input texts, writes
/// `<strategy>_<i>_<j>.csv` with timing statistics per extract length.
#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// Text files to extract sequences from.
    #[clap(value_parser = value_parser!(PathBuf), num_args = 2.., required = true)]
    pub texts: Vec<PathBuf>,

    /// Trials per extract length.
    #[arg(short, long, default_value_t = 32, value_parser = value_parser!(u64).range(32..))]
    pub runs: u64,

    /// Smallest extract length.
    #[arg(short, long, default_value_t = 8, value_parser = value_parser!(u64).range(1..))]
    pub lower: u64,

    /// Largest extract length. Must be larger than --lower.
    #[arg(short, long, default_value_t = 2048, value_parser = value_parser!(u64).range(1..))]
    pub upper: u64,

    /// Increment of the extract length.
    #[arg(short, long, default_value_t = 64, value_parser = value_parser!(u64).range(1..))]
    pub step: u64,

    /// Offset in each text where extracts start. `-sp` is accepted as well.
    #[arg(long = "start-pos", visible_alias = "sp", default_value_t = 0)]
    pub start_pos: u64,

    /// Directory for the .csv files. Created when missing.
    #[arg(short, long, value_parser = value_parser!(PathBuf), default_value = "results")]
    pub output: PathBuf,

    /// Strategies to benchmark.
    ///
    /// `recursive` takes exponential time and is only run when requested.
    #[arg(
        short = 'a',
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Strategy::Memoized, Strategy::BottomUp, Strategy::SpaceOptimized]
    )]
    pub strategies: Vec<Strategy>,

    /// Log more. Pass twice for per-trial timings.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses the process arguments, printing usage and exiting on errors.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses `args`, including the program name.
    ///
    /// The two-letter flag `-sp` is rewritten to `--sp` first. After parsing,
    /// `--upper` is checked to be larger than `--lower`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Self::try_parse_from(args.into_iter().map(|a| normalize(a.into())))?;
        if cli.upper <= cli.lower {
            return Err(Self::command().error(
                ErrorKind::ValueValidation,
                format!(
                    "upper ({}) must be > lower ({})",
                    cli.upper, cli.lower
                ),
            ));
        }
        Ok(cli)
    }

    pub fn config(&self) -> BenchConfig {
        BenchConfig {
            runs: self.runs as usize,
            lower: self.lower as usize,
            upper: self.upper as usize,
            step: self.step as usize,
            ..BenchConfig::default()
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn normalize(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-sp") => "--sp".into(),
        Some(s) if s.starts_with("-sp=") => format!("-{s}").into(),
        _ => arg,
    }
}
