//! Fixed layout of a generated fixture.
//!
//! The layout is not configurable: downstream harnesses rely on the exact
//! sizes below.

/// Length of every generated sub-sequence.
pub const SEQUENCE_LEN: usize = 256;

/// Size of the chunk used as the unit of shuffling.
pub const CHUNK_SIZE: usize = 32;

/// Number of sub-sequences concatenated into a fixture.
pub const PATTERN_COUNT: usize = 3;

/// Total length of a fixture in bytes.
pub const DATASET_LEN: usize = SEQUENCE_LEN * PATTERN_COUNT;

/// Number of whole chunks in a fixture.
pub const DATASET_CHUNKS: usize = DATASET_LEN / CHUNK_SIZE;

const _: () = assert!(DATASET_LEN % CHUNK_SIZE == 0);
