//! Fixture assembly: generate, concatenate, chunk, shuffle, flatten.

use crate::chunk::{self, chunk_count, ChunkOrder};
use crate::config::{CHUNK_SIZE, DATASET_LEN};
use crate::error::Result;
use crate::random::RandomSource;
use crate::sequence::Pattern;


/// A shuffled fixture together with the chunk order that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    bytes: Vec<u8>,
    order: ChunkOrder,
    chunk_size: usize,
}

impl Dataset {
    /// Output bytes, ready to be written.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the dataset and returns the output bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Source chunk index for every output position.
    pub fn order(&self) -> &ChunkOrder {
        &self.order
    }

    /// Chunk size the shuffle operated on.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Length of the output in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the output holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Rebuilds the concatenation as it was before the shuffle.
    ///
    /// # Errors
    ///
    /// Never fails for a dataset built by [`assemble`]; the error is the one
    /// [`chunk::restore`] reports for inconsistent inputs.
    pub fn unshuffled(&self) -> Result<Vec<u8>> {
        chunk::restore(&self.bytes, self.chunk_size, &self.order)
    }
}

/// Generates every [`Pattern`] in order and concatenates the results.
///
/// The random sequence is drawn from `source` before anything else, so a
/// seeded source yields the same bytes regardless of what follows.
pub fn concatenate<S: RandomSource + ?Sized>(source: &mut S) -> Vec<u8> {
    let mut data = Vec::with_capacity(DATASET_LEN);
    for pattern in Pattern::ALL {
        data.extend(pattern.generate(source));
    }
    data
}

/// Shuffles `data` at `chunk_size` granularity.
///
/// # Parameters
///
/// * `data` - Unshuffled bytes
/// * `chunk_size` - Size of the unit of shuffling
/// * `source` - Supplies the chunk permutation
///
/// # Returns
///
/// A [`Dataset`] holding the flattened output and the order applied.
///
/// # Errors
///
/// This function will return an error if:
///
/// - `chunk_size` is zero
/// - `source` does not produce a permutation of the chunk indices
pub fn assemble<S: RandomSource + ?Sized>(
    data: &[u8],
    chunk_size: usize,
    source: &mut S,
) -> Result<Dataset> {
    let count = chunk_count(data.len(), chunk_size)?;
    let order = ChunkOrder::shuffled(count, source)?;
    let bytes = chunk::flatten(data, chunk_size, &order)?;

    Ok(Dataset {
        bytes,
        order,
        chunk_size,
    })
}

/// Builds a complete fixture: `random ‖ decreasing-jump ‖ mid-jump`, shuffled
/// in [`CHUNK_SIZE`]-byte chunks.
///
/// # Errors
///
/// Fails only if `source` returns a chunk order that is not a permutation.
pub fn generate<S: RandomSource + ?Sized>(source: &mut S) -> Result<Dataset> {
    let data = concatenate(source);
    assemble(&data, CHUNK_SIZE, source)
}
