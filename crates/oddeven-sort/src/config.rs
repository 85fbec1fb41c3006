use derive_builder::Builder;

use crate::Order;

/// Worker threads used when no count is given.
pub const DEFAULT_THREADS: usize = 8;

/// Settings for a [`ParallelSorter`](crate::ParallelSorter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct SortConfig {
    /// Size of the worker pool. Fixed for the lifetime of the sorter.
    pub threads: usize,
    pub order: Order,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            order: Order::default(),
        }
    }
}

impl SortConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            ..Default::default()
        }
    }
}
