//! Generators for the three sub-sequences of a fixture.

use std::fmt;

use crate::config::{PATTERN_COUNT, SEQUENCE_LEN};
use crate::random::RandomSource;

/// The sub-sequences a fixture is built from, in concatenation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Independently drawn uniform bytes.
    Random,
    /// `0, 255, 1, 254, ..., 127, 128`: jumps between the extremes of the byte range.
    DecreasingJump,
    /// `0, 128, 1, 129, ..., 127, 255`: jumps across the midpoint of the byte range.
    MidJump,
}

impl Pattern {
    /// All patterns in the order they are concatenated.
    pub const ALL: [Pattern; PATTERN_COUNT] =
        [Pattern::Random, Pattern::DecreasingJump, Pattern::MidJump];

    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::DecreasingJump => "decreasing-jump",
            Pattern::MidJump => "mid-jump",
        }
    }

    /// Produces the [`SEQUENCE_LEN`]-byte sequence for this pattern.
    ///
    /// Only [`Pattern::Random`] draws from `source`.
    pub fn generate<S: RandomSource + ?Sized>(self, source: &mut S) -> Vec<u8> {
        match self {
            Pattern::Random => random_bytes(source, SEQUENCE_LEN),
            Pattern::DecreasingJump => decreasing_jump(),
            Pattern::MidJump => mid_jump(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draws `n` uniform bytes from `source`.
pub fn random_bytes<S: RandomSource + ?Sized>(source: &mut S, n: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n];
    source.fill_bytes(&mut bytes);
    bytes
}

/// Returns `[0, 255, 1, 254, ..., 127, 128]`.
///
/// Even positions `k` hold `k / 2`, odd positions hold `255 - (k - 1) / 2`.
pub fn decreasing_jump() -> Vec<u8> {
    interleave(|low| u8::MAX - low)
}

/// Returns `[0, 128, 1, 129, ..., 127, 255]`.
///
/// Even positions `k` hold `k / 2`, odd positions hold `128 + (k - 1) / 2`.
pub fn mid_jump() -> Vec<u8> {
    interleave(|low| 128 + low)
}

/// Pairs every ascending low value `0..=127` with `high(low)`.
fn interleave(high: impl Fn(u8) -> u8) -> Vec<u8> {
    let sequence: Vec<u8> = (0..=u8::MAX / 2).flat_map(|low| [low, high(low)]).collect();
    debug_assert_eq!(sequence.len(), SEQUENCE_LEN);
    sequence
}
