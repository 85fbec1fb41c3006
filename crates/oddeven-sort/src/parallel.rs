//! Data-parallel odd-even transposition sort.
//!
//! Phases stay strictly sequenced: the odd phase of a pass finishes before
//! the even phase starts. Inside a phase the pairs are split statically into
//! at most `threads` contiguous partitions, and each partition is handled by
//! exactly one task on a fixed-size pool owned by the [`ParallelSorter`].
//! Every task counts swaps into its own slot; the slots are folded only
//! after the whole phase has joined.

use log::{debug, trace};
use rayon::prelude::*;

use crate::kernel::{compare_swap_pairs, Phase};
use crate::{check_order, Order, SortConfig, SortError, SortStats};

/// Odd-even transposition sorter backed by its own worker pool.
#[derive(Debug)]
pub struct ParallelSorter {
    pool: rayon::ThreadPool,
    config: SortConfig,
}

impl ParallelSorter {
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        if config.threads == 0 {
            return Err(SortError::ZeroThreads);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("oddeven-worker-{i}"))
            .build()?;

        debug!(
            "parallel sorter ready: {} worker threads, {} order",
            config.threads, config.order
        );
        Ok(Self { pool, config })
    }

    pub fn threads(&self) -> usize {
        self.config.threads
    }

    pub fn order(&self) -> Order {
        self.config.order
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sort `seq` in place into the sorter's order.
    pub fn sort<T: Ord + Send>(&self, seq: &mut [T]) {
        self.sort_with_stats(seq);
    }

    /// Sort `seq` in place and report the work done.
    pub fn sort_with_stats<T: Ord + Send>(&self, seq: &mut [T]) -> SortStats {
        let SortConfig { threads, order } = self.config;
        let mut slots = Vec::with_capacity(threads);
        let mut stats = SortStats::default();

        self.pool.install(|| loop {
            let mut swapped = 0;
            for phase in Phase::PASS {
                swapped += run_phase(phase.region(seq), threads, order, &mut slots);
            }

            stats.passes += 1;
            stats.swaps += swapped;
            trace!("parallel pass {}: {} swaps", stats.passes, swapped);

            if swapped == 0 {
                break;
            }
        });

        debug!(
            "parallel sort of {} elements on {} threads: {} passes, {} swaps",
            seq.len(),
            threads,
            stats.passes,
            stats.swaps
        );
        stats
    }

    /// [`check_order`] evaluated on this sorter's pool with its order.
    pub fn check<T: Ord + Sync>(&self, seq: &[T]) -> bool {
        self.pool.install(|| check_order(seq, self.config.order))
    }
}

/// Run one phase over `region` and return the number of swaps. The phase
/// swapped at all iff any slot is non-zero.
///
/// `region` always holds whole pairs and partitions are an even number of
/// elements long, so no pair straddles two partitions. `collect_into_vec`
/// returns only once every partition has written its slot.
fn run_phase<T: Ord + Send>(
    region: &mut [T],
    threads: usize,
    order: Order,
    slots: &mut Vec<usize>,
) -> usize {
    let pairs = region.len() / 2;
    if pairs == 0 {
        return 0;
    }

    let partition = pairs.div_ceil(threads) * 2;
    region
        .par_chunks_mut(partition)
        .map(|part| compare_swap_pairs(part, order))
        .collect_into_vec(slots);

    slots.iter().sum()
}

/// Sort `seq` into the default (descending) order on a fresh pool of
/// `threads` workers.
pub fn sort_parallel<T: Ord + Send>(seq: &mut [T], threads: usize) -> Result<(), SortError> {
    ParallelSorter::new(SortConfig::with_threads(threads))?.sort(seq);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequential;

    fn sorter(threads: usize, order: Order) -> ParallelSorter {
        ParallelSorter::new(SortConfig { threads, order }).unwrap()
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = ParallelSorter::new(SortConfig::with_threads(0)).unwrap_err();
        assert!(matches!(err, SortError::ZeroThreads));

        let mut arr = [1, 2, 3];
        assert!(sort_parallel(&mut arr, 0).is_err());
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn test_sort_parallel_descending() {
        let mut arr = [5, 3, 8, 1];
        sort_parallel(&mut arr, 8).unwrap();
        assert_eq!(arr, [8, 5, 3, 1]);
    }

    #[test]
    fn test_all_equal_makes_no_swaps() {
        let mut arr = [1, 1, 1];
        let stats = sorter(4, Order::Descending).sort_with_stats(&mut arr);
        assert_eq!(arr, [1, 1, 1]);
        assert_eq!(stats, SortStats { passes: 1, swaps: 0 });
    }

    #[test]
    fn test_short_inputs() {
        let s = sorter(8, Order::Descending);

        let mut empty: [i32; 0] = [];
        s.sort(&mut empty);
        assert!(s.check(&empty));

        let mut one = [3];
        s.sort(&mut one);
        assert_eq!(one, [3]);

        let mut two = [1, 2];
        s.sort(&mut two);
        assert_eq!(two, [2, 1]);
    }

    #[test]
    fn test_partition_sizes_match_sequential() {
        let input: Vec<i32> = (0..37).map(|i| (i * 17 % 23) - 11).collect();

        for order in [Order::Descending, Order::Ascending] {
            let mut expected = input.clone();
            let seq_stats = sequential::sort_with_stats(&mut expected, order);

            // More threads than pairs, one thread, and uneven splits.
            for threads in [1, 2, 3, 5, 8, 64] {
                let mut arr = input.clone();
                let stats = sorter(threads, order).sort_with_stats(&mut arr);
                assert_eq!(arr, expected, "threads={threads} order={order}");
                assert_eq!(stats, seq_stats, "threads={threads} order={order}");
            }
        }
    }

    #[test]
    fn test_accessors() {
        let s = sorter(3, Order::Ascending);
        assert_eq!(s.threads(), 3);
        assert_eq!(s.order(), Order::Ascending);
        assert_eq!(s.config(), &SortConfig { threads: 3, order: Order::Ascending });
    }

    #[test]
    fn test_check_uses_sorter_order() {
        let asc = sorter(2, Order::Ascending);
        let desc = sorter(2, Order::Descending);
        let arr = [1, 2, 2, 5];
        assert!(asc.check(&arr));
        assert!(!desc.check(&arr));
    }

    #[test]
    fn test_sorter_is_reusable() {
        let s = sorter(4, Order::Descending);
        for n in [0, 1, 2, 9, 100] {
            let mut arr: Vec<i32> = (0..n).collect();
            s.sort(&mut arr);
            assert!(s.check(&arr), "n={n}");
        }
    }
}
