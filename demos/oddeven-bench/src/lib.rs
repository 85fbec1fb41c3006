//! Benchmark driver for odd-even transposition sort.
//!
//! Generates one random sequence, sorts an independent copy with each
//! sorter, times both and verifies both results with the order check.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, info};
use oddeven_rng::{generate, Generator};
use oddeven_sort::{
    check_order, sequential, Order, ParallelSorter, SortConfigBuilder, SortStats, DEFAULT_THREADS,
};

pub const SEQUENTIAL_LABEL: &str = "Sequential sort";
pub const PARALLEL_LABEL: &str = "Parallel sort";

/// Elements generated when no size is given
pub const DEFAULT_SIZE: usize = 10_000;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: usize,
    pub threads: usize,
    pub seed: u64,
    pub generator: Generator,
    pub order: Order,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            threads: DEFAULT_THREADS,
            seed: DEFAULT_SEED,
            generator: Generator::default(),
            order: Order::default(),
        }
    }
}

/// Timing and verification result of one sorter.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub label: &'static str,
    pub elapsed: Duration,
    /// Result of the order check on the sorted output
    pub sorted: bool,
    pub stats: SortStats,
}

impl Measurement {
    /// Elapsed time truncated to whole milliseconds
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label, self.millis())
    }
}

#[derive(Debug, Clone)]
pub struct BenchReport {
    pub sequential: Measurement,
    pub parallel: Measurement,
    /// Whether both sorters produced exactly the same sequence
    pub identical: bool,
}

impl BenchReport {
    pub fn all_sorted(&self) -> bool {
        self.sequential.sorted && self.parallel.sorted
    }

    /// Panics if either result failed the order check. An unordered result
    /// is a sorter bug, never a recoverable condition.
    pub fn assert_sorted(&self, order: Order) {
        for m in [&self.sequential, &self.parallel] {
            assert!(
                m.sorted,
                "{} left the sequence out of {} order",
                m.label, order
            );
        }
    }
}

fn timed<F>(f: F) -> (Duration, SortStats)
where
    F: FnOnce() -> SortStats,
{
    let start = Instant::now();
    let stats = f();
    (start.elapsed(), stats)
}

/// Run both sorters on copies of one generated sequence.
pub fn run(config: &BenchConfig) -> anyhow::Result<BenchReport> {
    let sort_config = SortConfigBuilder::default()
        .threads(config.threads)
        .order(config.order)
        .build()
        .context("invalid sort configuration")?;
    let sorter = ParallelSorter::new(sort_config).with_context(|| {
        format!("cannot start parallel sorter with {} threads", config.threads)
    })?;

    info!(
        "sorting {} elements ({} generator, seed {}) in {} order, {} threads",
        config.size, config.generator, config.seed, config.order, config.threads
    );
    let input = generate(config.generator, config.seed, config.size);
    let mut seq_data = input.clone();
    let mut par_data = input;

    let (elapsed, stats) = timed(|| sequential::sort_with_stats(&mut seq_data, config.order));
    let sequential = Measurement {
        label: SEQUENTIAL_LABEL,
        elapsed,
        sorted: check_order(&seq_data, config.order),
        stats,
    };
    info!("{} done: {:?}, {:?}", SEQUENTIAL_LABEL, elapsed, stats);

    let (elapsed, stats) = timed(|| sorter.sort_with_stats(&mut par_data));
    let parallel = Measurement {
        label: PARALLEL_LABEL,
        elapsed,
        sorted: sorter.check(&par_data),
        stats,
    };
    info!("{} done: {:?}, {:?}", PARALLEL_LABEL, elapsed, stats);

    let identical = seq_data == par_data;
    debug!("outputs identical: {}", identical);

    Ok(BenchReport {
        sequential,
        parallel,
        identical,
    })
}
