use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("start pos {offset} is out of range, file size is {size}")]
    OffsetOutOfRange { offset: u64, size: u64 },

    #[error("total length {total} is out of range, file size is {size}")]
    ExtractOutOfRange { total: u64, size: u64 },

    #[error("<RUNS> must be at least {min}, got {runs}")]
    TooFewRuns { runs: usize, min: usize },

    #[error("<STEP>, <LOWER> and <UPPER> have to be positive")]
    NonPositiveRange,

    #[error("<LOWER> ({lower}) must be at most equal to <UPPER> ({upper})")]
    EmptyRange { lower: usize, upper: usize },

    #[error("{runs} runs for each of {sizes} sizes is too many trials")]
    TooManyTrials { runs: usize, sizes: usize },

    #[error("quartiles need at least 4 data points, got {0}")]
    TooFewSamples(usize),

    #[error("failed to write results: {0}")]
    Csv(#[from] csv::Error),
}
