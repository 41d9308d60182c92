// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing_subscriber::EnvFilter;

use animsort::Error;
use animsort::Result;
use animsort::animated::AnimatedSequence;
use animsort::config::Config;
use animsort::render::TerminalRenderer;
use animsort::schedule::ThreadScheduler;
use animsort::sort::Algorithm;
use animsort::sort::PivotStrategy;

#[derive(Debug, Parser)]
#[command(
    name = "animsort",
    about = "Watch a comparison sort in the terminal, one compare or swap per tick",
    version
)]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Pivot strategy for quicksort and introsort.
    #[arg(long)]
    pivot: Option<PivotStrategy>,

    /// Milliseconds between ticks.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Number of values to shuffle and sort.
    #[arg(long)]
    len: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Length in cells of the longest bar.
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Print the available algorithms and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(pivot) = self.pivot {
            config.pivot = pivot;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(len) = self.len {
            config.len = len;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        return Ok(config);
    }
}

fn list() {
    for algorithm in Algorithm::ALL {
        if algorithm.needs_pivot() {
            let pivots: Vec<&str> = PivotStrategy::ALL.iter().map(|p| p.name()).collect();
            println!("{} (pivot: {})", algorithm, pivots.join(", "));
        } else {
            println!("{}", algorithm);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        list();
        return Ok(());
    }

    let config = cli.config()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let len = i32::try_from(config.len).map_err(|_| Error::invalid("len is too large"))?;
    let mut values: Vec<i32> = (1..=len).collect();
    values.shuffle(&mut rng);

    tracing::info!(
        algorithm = %config.algorithm,
        pivot = %config.pivot,
        len = config.len,
        seed,
        "starting"
    );

    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b[2J")?;
    stdout.flush()?;

    let renderer = TerminalRenderer::new(stdout, cli.width);
    let mut scheduler = ThreadScheduler::new();
    let mut seq = AnimatedSequence::new(&values, renderer, &mut scheduler, config.interval())?;

    config.algorithm.run(&mut seq, config.pivot, &mut rng)?;
    tracing::info!(actions = seq.pending(), "sort finished, replaying");

    while seq.pending() > 0 && !seq.is_cancelled() {
        thread::sleep(config.interval());
    }
    // Let the last highlighted frame give way to a plain one.
    thread::sleep(config.interval() * 2);
    return seq.cancel();
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    return match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("animsort: {}", error);
            ExitCode::FAILURE
        }
    };
}
