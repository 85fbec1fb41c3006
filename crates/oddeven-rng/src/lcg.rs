//! 32-bit linear congruential generator.

const MULTIPLIER: u32 = 1103515245;
const INCREMENT: u32 = 12345;

/// Fold a 64-bit seed into the 32-bit LCG state.
fn initial_state(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

pub fn fill(seed: u64, out: &mut [i32]) {
    let mut state = initial_state(seed);
    for v in out.iter_mut() {
        state = state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        *v = crate::to_value((state >> 16) & 0xFFFF);
    }
}
