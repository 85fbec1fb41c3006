//! Order-check verifier.

use rayon::prelude::*;

use crate::Order;

/// Whether `seq` is in the default (descending) order.
pub fn check<T: Ord + Sync>(seq: &[T]) -> bool {
    check_order(seq, Order::default())
}

/// Whether every adjacent pair of `seq` satisfies `order`.
///
/// Read-only; the pairs are checked in parallel and AND-reduced.
pub fn check_order<T: Ord + Sync>(seq: &[T], order: Order) -> bool {
    seq.par_windows(2).all(|w| order.in_order(&w[0], &w[1]))
}
