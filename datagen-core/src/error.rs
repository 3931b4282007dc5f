//! Error types and result handling for fixture assembly.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of chunking and reordering.
///
/// The fixed fixture layout never triggers these; they guard the public
/// chunking API against inputs that cannot describe a chunk permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Chunks must hold at least one byte.
    InvalidChunkSize {
        /// Chunk size supplied by the caller
        size: usize,
    },

    /// The chunk order does not cover the data it is applied to.
    ChunkCountMismatch {
        /// Number of chunks in the data
        expected: usize,
        /// Number of entries in the chunk order
        actual: usize,
    },

    /// A random source produced an order that is not a permutation.
    InvalidChunkOrder {
        /// Number of chunks the order was meant to permute
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChunkSize { size } => write!(f, "invalid chunk size: {size}"),
            Error::ChunkCountMismatch { expected, actual } => write!(
                f,
                "chunk order has {actual} entries but the data has {expected} chunks",
            ),
            Error::InvalidChunkOrder { count } => {
                write!(f, "chunk order is not a permutation of {count} chunks")
            }
        }
    }
}

impl std::error::Error for Error {}
