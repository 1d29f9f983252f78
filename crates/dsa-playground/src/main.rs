mod config;
mod demo;
mod input;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use meter::CountingAllocator;
use sorting::Algorithm;
use tracing_subscriber::EnvFilter;

use crate::config::{PlaygroundConfig, Source};
use crate::demo::{RunOptions, RunOptionsBuilder, Scan};
use crate::report::{Report, Table};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator::system();

/// dsa-playground command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "dsa-playground",
    version,
    about = "Sorting and complexity demonstrations with heap-delta readings"
)]
struct Cli {
    /// Path to YAML config (defaults to the nearest `dsa-playground.yaml`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print every visited name to stdout
    #[arg(long, global = true)]
    echo: bool,

    /// Skip the memory measurement
    #[arg(long, global = true)]
    no_measure: bool,

    /// Log filter, e.g. `debug` or `dsa=debug` (overrides config and RUST_LOG)
    #[arg(long, global = true, env = "DSA_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// O(1): peek at the first name
    Constant(ScanArgs),
    /// O(n): visit every name once
    Linear(ScanArgs),
    /// O(n^2): visit every pair of names
    Quadratic(ScanArgs),
    /// Sort `1..=N` with one algorithm
    Sort(SortArgs),
    /// Sort the same input with every algorithm
    Compare(InputArgs),
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Number of names to generate
    #[arg(long)]
    names: Option<usize>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Length of the input sequence
    #[arg(long)]
    size: Option<usize>,

    /// Shuffle the input instead of passing it in order
    #[arg(long, overrides_with = "no_shuffle")]
    shuffle: bool,

    /// Pass the input in order even if the config asks for shuffling
    #[arg(long, overrides_with = "shuffle")]
    no_shuffle: bool,

    /// Seed for `--shuffle`
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct SortArgs {
    /// bubble, selection, insertion or merge
    #[arg(short, long, default_value_t = Algorithm::Bubble)]
    algorithm: Algorithm,

    #[command(flatten)]
    input: InputArgs,
}

impl InputArgs {
    fn wants_shuffle(&self, config: &PlaygroundConfig) -> bool {
        match (self.shuffle, self.no_shuffle) {
            (true, _) => true,
            (_, true) => false,
            _ => config.shuffle,
        }
    }

    fn numbers(&self, config: &PlaygroundConfig) -> Vec<i64> {
        let size = self.size.unwrap_or(config.numbers);
        if self.wants_shuffle(config) {
            input::shuffled_numbers(size, self.seed.unwrap_or_else(|| config.seed()))
        } else {
            input::generate_numbers(size)
        }
    }
}

fn init_logging(cli_filter: Option<&str>, config: &PlaygroundConfig) {
    let filter = match (cli_filter, std::env::var_os(EnvFilter::DEFAULT_ENV)) {
        (Some(directives), _) => EnvFilter::try_new(directives).map_err(|e| e.to_string()),
        (None, Some(_)) => EnvFilter::try_from_default_env().map_err(|e| e.to_string()),
        (None, None) => EnvFilter::try_new(config.log.as_deref().unwrap_or("info"))
            .map_err(|e| e.to_string()),
    };
    let filter = filter.unwrap_or_else(|err| {
        eprintln!("Ignoring invalid log filter: {err}");
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(format: Format, reports: &[Report]) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            let json = if let [single] = reports {
                serde_json::to_string_pretty(single)?
            } else {
                serde_json::to_string_pretty(reports)?
            };
            println!("{json}");
        }
        Format::Text if reports.len() > 1 => println!("{}", Table(reports)),
        Format::Text => {
            for report in reports {
                println!("{report}");
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let (config, source) = config::load(cli.config.as_deref(), &cwd)?;

    init_logging(cli.log.as_deref(), &config);
    match &source {
        Source::Explicit(path) | Source::Discovered(path) => {
            tracing::debug!(path = %path.display(), "loaded config");
        }
        Source::Defaults => tracing::debug!("no config file, using defaults"),
    }

    let opts: RunOptions = RunOptionsBuilder::default()
        .echo(cli.echo)
        .measure(!cli.no_measure)
        .build()?;

    let reports = match &cli.command {
        Command::Constant(args) => {
            let names = complexity::generate_names(args.names.unwrap_or(config.names));
            vec![demo::run_scan(Scan::Constant, &names, &opts)]
        }
        Command::Linear(args) => {
            let names = complexity::generate_names(args.names.unwrap_or(config.names));
            vec![demo::run_scan(Scan::Linear, &names, &opts)]
        }
        Command::Quadratic(args) => {
            let names = complexity::generate_names(args.names.unwrap_or(config.quadratic_names));
            vec![demo::run_scan(Scan::Quadratic, &names, &opts)]
        }
        Command::Sort(args) => {
            let numbers = args.input.numbers(&config);
            vec![demo::run_sort(args.algorithm, &numbers, &opts)?]
        }
        Command::Compare(args) => demo::compare(&args.numbers(&config), &opts)?,
    };

    emit(cli.format, &reports)
}

fn main() {
    meter::counting::mark_installed();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
