use edit_bench::{
    cli::Cli, measure, CsvSink, Error, Harness, Result, SequencePair, TextExtractor, TextSource,
};
use itertools::Itertools;
use log::info;
use std::{
    fs,
    io::{stderr, Write},
    process::ExitCode,
};

/// An in-place `[====>   ] 12.34%` bar on stderr.
struct Progress {
    drawn: Option<usize>,
}

impl Progress {
    const WIDTH: usize = 70;

    fn new() -> Self {
        Self { drawn: None }
    }

    fn update(&mut self, done: usize, total: usize) {
        let progress = done as f64 / total as f64;
        // Only redraw when the shown percentage changes.
        let hundredths = (progress * 10000.) as usize;
        if self.drawn == Some(hundredths) {
            return;
        }
        self.drawn = Some(hundredths);
        let p = (Self::WIDTH as f64 * progress) as usize;
        let bar: String = (0..Self::WIDTH)
            .map(|i| match i.cmp(&p) {
                std::cmp::Ordering::Less => '=',
                std::cmp::Ordering::Equal => '>',
                std::cmp::Ordering::Greater => ' ',
            })
            .collect();
        let mut err = stderr().lock();
        let _ = write!(err, "[{bar}] {:.2}%\r", progress * 100.);
        let _ = err.flush();
    }

    fn finish(self) {
        if self.drawn.is_some() {
            eprintln!();
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let harness = Harness::new(cli.config())?;
    let config = harness.config();

    let texts: Vec<TextExtractor> = cli
        .texts
        .iter()
        .map(|path| TextExtractor::open(path, cli.start_pos as usize))
        .try_collect()?;
    // Fail before writing anything when a text is too short.
    for text in &texts {
        text.extract(config.last_size())?;
    }

    fs::create_dir_all(&cli.output).map_err(|source| Error::Io {
        path: cli.output.clone(),
        source,
    })?;

    for &strategy in cli.strategies.iter().unique() {
        info!("=== {strategy} ===");
        for (i, j) in (0..texts.len())
            .cartesian_product(0..texts.len())
            .filter(|(i, j)| i != j)
        {
            let name = format!("{}_{}_{}", strategy.tag(), i + 1, j + 1);
            info!(
                "Running {name}: {} vs {}",
                cli.texts[i].display(),
                cli.texts[j].display()
            );

            let mut sink = CsvSink::create(cli.output.join(format!("{name}.csv")))?;
            let mut progress = Progress::new();
            harness.run(strategy, &texts[i], &texts[j], &mut sink, |done, total| {
                progress.update(done, total)
            })?;
            progress.finish();

            let n = config.last_size();
            let pair = SequencePair::new(texts[i].extract(n)?, texts[j].extract(n)?);
            let m = measure(strategy.build(pair).as_mut());
            info!(
                "{name} done. n = {n}  distance = {}  time = {:.3}ms  memory (approx.) = {} MB",
                m.distance,
                m.elapsed.as_secs_f64() * 1e3,
                m.memory_bytes as f64 / 1e6
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
