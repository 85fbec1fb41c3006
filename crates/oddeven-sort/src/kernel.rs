//! Compare-swap kernel shared by both sorters.

use crate::Order;

/// One sweep over either the odd-indexed or the even-indexed pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Odd,
    Even,
}

impl Phase {
    /// Phases of one pass, in execution order.
    pub(crate) const PASS: [Phase; 2] = [Phase::Odd, Phase::Even];

    fn offset(self) -> usize {
        match self {
            Phase::Odd => 1,
            Phase::Even => 0,
        }
    }

    /// Slice of `seq` covered by this phase: starts at the phase offset and is
    /// cut down to a whole number of pairs.
    pub(crate) fn region<T>(self, seq: &mut [T]) -> &mut [T] {
        let start = self.offset().min(seq.len());
        let tail = &mut seq[start..];
        let pairs = tail.len() / 2;
        &mut tail[..pairs * 2]
    }
}

/// Compare-swap every `(2k, 2k + 1)` pair of `pairs`. Returns the number of
/// swaps made.
#[inline]
pub(crate) fn compare_swap_pairs<T: Ord>(pairs: &mut [T], order: Order) -> usize {
    let mut swaps = 0;
    for pair in pairs.chunks_exact_mut(2) {
        if !order.in_order(&pair[0], &pair[1]) {
            pair.swap(0, 1);
            swaps += 1;
        }
    }
    swaps
}
