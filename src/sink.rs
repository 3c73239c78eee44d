use crate::{
    bench::BenchmarkResult,
    error::{Error, Result},
};
use serde::Serialize;
use std::{fs::File, io, path::Path};

/// Receives the statistics rows of a benchmark, in ascending order of `n`.
pub trait ResultSink {
    fn write(&mut self, row: &BenchmarkResult) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ResultSink for Vec<BenchmarkResult> {
    fn write(&mut self, row: &BenchmarkResult) -> Result<()> {
        self.push(*row);
        Ok(())
    }
}

pub const HEADER: [&str; 8] = [
    "n", "t_mean", "t_stdev", "t_Q0", "t_Q1", "t_Q2", "t_Q3", "t_Q4",
];

#[derive(Serialize)]
struct Record {
    n: usize,
    t_mean: f64,
    t_stdev: f64,
    t_q0: f64,
    t_q1: f64,
    t_q2: f64,
    t_q3: f64,
    t_q4: f64,
}

impl From<&BenchmarkResult> for Record {
    fn from(r: &BenchmarkResult) -> Self {
        let q = &r.quartiles;
        Self {
            n: r.n,
            t_mean: r.mean,
            t_stdev: r.stdev,
            t_q0: q.min(),
            t_q1: q.q1(),
            t_q2: q.median(),
            t_q3: q.q3(),
            t_q4: q.max(),
        }
    }
}

/// Writes rows as CSV, starting with [`HEADER`]. Every row is flushed.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file)
    }
}

impl<W: io::Write> CsvSink<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(HEADER)?;
        writer.flush().map_err(csv::Error::from)?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Csv(e.into_error().into()))
    }
}

impl<W: io::Write> ResultSink for CsvSink<W> {
    fn write(&mut self, row: &BenchmarkResult) -> Result<()> {
        self.writer.serialize(Record::from(row))?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush().map_err(csv::Error::from)?)
    }
}
