//! # datagen-core
//!
//! Byte-sequence generators and chunk shuffling for serial transmission fixtures.
//!
//! A fixture is built from three 256-byte sub-sequences: uniformly random bytes,
//! a decreasing-jump pattern (`0, 255, 1, 254, ...`) and a mid-jump pattern
//! (`0, 128, 1, 129, ...`). They are concatenated, cut into 32-byte chunks and
//! shuffled at chunk granularity, so every 32-byte window keeps its local jump
//! structure while the global arrangement is randomized.
//!
//! Randomness is always injected through [`random::RandomSource`]; nothing in
//! this crate touches a process-global generator.

pub mod chunk;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod random;
pub mod sequence;

pub use chunk::{chunk_count, flatten, is_chunk_permutation, restore, ChunkOrder};
pub use config::{CHUNK_SIZE, DATASET_CHUNKS, DATASET_LEN, PATTERN_COUNT, SEQUENCE_LEN};
pub use error::{Error, Result};
pub use pipeline::{assemble, concatenate, generate, Dataset};
pub use random::{RandomSource, RngSource};
pub use sequence::{decreasing_jump, mid_jump, random_bytes, Pattern};
