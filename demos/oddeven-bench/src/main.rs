//! Times sequential and parallel odd-even transposition sort on one random
//! sequence and prints both timings.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use oddeven_bench::{BenchConfig, DEFAULT_SEED, DEFAULT_SIZE};
use oddeven_rng::Generator;
use oddeven_sort::{Order, DEFAULT_THREADS};

#[derive(Parser, Debug)]
#[command(
    name = "oddeven-bench",
    version,
    about = "Sequential vs parallel odd-even transposition sort"
)]
struct Cli {
    /// Number of elements to generate
    #[arg(long, env = "ODDEVEN_SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Worker threads for the parallel sorter
    #[arg(short = 't', long, env = "ODDEVEN_THREADS", default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Seed for the sequence generator
    #[arg(long, env = "ODDEVEN_SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Sequence generator: `lcg` or `chacha`
    #[arg(long, env = "ODDEVEN_GENERATOR", default_value_t = Generator::default())]
    generator: Generator,

    /// Sort direction: `descending` or `ascending`
    #[arg(long, env = "ODDEVEN_ORDER", default_value_t = Order::default())]
    order: Order,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for BenchConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            size: cli.size,
            threads: cli.threads,
            seed: cli.seed,
            generator: cli.generator,
            order: cli.order,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over -v.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match oddeven_bench::run(&BenchConfig::from(&cli)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    report.assert_sorted(cli.order);

    println!("{}", report.sequential);
    println!("{}", report.parallel);
}
