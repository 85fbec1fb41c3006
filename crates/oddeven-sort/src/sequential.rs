//! Single-threaded odd-even transposition sort.

use log::{debug, trace};

use crate::kernel::{compare_swap_pairs, Phase};
use crate::{Order, SortStats};

/// Sort `seq` in place into the default (descending) order.
pub fn sort<T: Ord>(seq: &mut [T]) {
    sort_with_stats(seq, Order::default());
}

/// Sort `seq` in place into `order`.
pub fn sort_by_order<T: Ord>(seq: &mut [T], order: Order) {
    sort_with_stats(seq, order);
}

/// Sort `seq` in place into `order` and report the work done.
pub fn sort_with_stats<T: Ord>(seq: &mut [T], order: Order) -> SortStats {
    let mut stats = SortStats::default();

    loop {
        let mut swapped = 0;
        for phase in Phase::PASS {
            swapped += compare_swap_pairs(phase.region(seq), order);
        }

        stats.passes += 1;
        stats.swaps += swapped;
        trace!("sequential pass {}: {} swaps", stats.passes, swapped);

        if swapped == 0 {
            break;
        }
    }

    debug!(
        "sequential sort of {} elements: {} passes, {} swaps",
        seq.len(),
        stats.passes,
        stats.swaps
    );
    stats
}
