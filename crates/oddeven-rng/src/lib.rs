//! Deterministic integer sequences for the sort benchmarks.
//!
//! Each value is `raw % VALUE_SPAN + VALUE_MIN` for a raw 32-bit generator
//! output, so it lies in `[VALUE_MIN, VALUE_MIN + VALUE_SPAN)` with a small
//! modulo bias toward the low end. Each backend exposes a single `fill`
//! entry point wired up through [`GeneratorOps`].

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

pub mod chacha;
pub mod lcg;

/// Smallest value a generator can produce.
pub const VALUE_MIN: i32 = -100;

/// Number of distinct values a generator can produce.
pub const VALUE_SPAN: u32 = 200;

/// Backend operation table.
#[derive(Clone, Copy)]
pub struct GeneratorOps {
    /// Overwrite every element of `out` with values derived from `seed`.
    pub fill: fn(seed: u64, out: &mut [i32]),
}

/// Operations backed by [`lcg::fill`].
pub const LCG_OPS: GeneratorOps = GeneratorOps { fill: lcg::fill };

/// Operations backed by [`chacha::fill`].
pub const CHACHA_OPS: GeneratorOps = GeneratorOps { fill: chacha::fill };

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Generator {
    Lcg,
    #[default]
    ChaCha,
}

impl Generator {
    pub fn ops(self) -> GeneratorOps {
        match self {
            Generator::Lcg => LCG_OPS,
            Generator::ChaCha => CHACHA_OPS,
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Lcg => f.write_str("lcg"),
            Generator::ChaCha => f.write_str("chacha"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown generator `{0}` (expected `lcg` or `chacha`)")]
pub struct ParseGeneratorError(String);

impl FromStr for Generator {
    type Err = ParseGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lcg" => Ok(Generator::Lcg),
            "chacha" => Ok(Generator::ChaCha),
            _ => Err(ParseGeneratorError(s.to_string())),
        }
    }
}

/// Generate `n` values from `generator` seeded with `seed`.
pub fn generate(generator: Generator, seed: u64, n: usize) -> Vec<i32> {
    let mut out = vec![0; n];
    (generator.ops().fill)(seed, &mut out);
    out
}

#[inline]
pub(crate) fn to_value(raw: u32) -> i32 {
    (raw % VALUE_SPAN) as i32 + VALUE_MIN
}
