//! ChaCha8 stream generator.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn fill(seed: u64, out: &mut [i32]) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for v in out.iter_mut() {
        *v = crate::to_value(rng.next_u32());
    }
}
