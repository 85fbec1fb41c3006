//! Odd-even transposition sort, sequential and data-parallel.
//!
//! A pass runs the odd phase (pairs starting at 1, 3, 5, ...) and then the
//! even phase (pairs starting at 0, 2, 4, ...). Pairs inside one phase never
//! share an index, so [`parallel`] can hand a phase out to several threads
//! while [`sequential`] walks it on the caller's thread. Passes repeat until
//! one makes no swap.
//!
//! Both sorters and the verifier ([`check_order`]) agree on an [`Order`]. The
//! default is [`Order::Descending`].

pub mod check;
pub mod config;
pub mod error;
mod kernel;
pub mod order;
pub mod parallel;
pub mod sequential;

pub use check::{check, check_order};
pub use config::{SortConfig, SortConfigBuilder, SortConfigBuilderError, DEFAULT_THREADS};
pub use error::SortError;
pub use order::Order;
pub use parallel::{sort_parallel, ParallelSorter};
pub use sequential::{sort, sort_by_order, sort_with_stats};

/// Work done by a single sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Passes executed, including the final pass that made no swap.
    pub passes: usize,
    /// Total compare-swaps that exchanged a pair.
    pub swaps: usize,
}
