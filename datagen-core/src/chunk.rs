//! Chunk partitioning, permutation and flattening.
//!
//! Data is cut into contiguous chunks of a fixed size; only the last chunk may
//! be shorter. A [`ChunkOrder`] lists source chunk indices in output order, and
//! [`flatten`] concatenates the chunks in that order without touching the byte
//! order inside any chunk.

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Number of chunks `len` bytes split into.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] when `size` is zero.
pub fn chunk_count(len: usize, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(Error::InvalidChunkSize { size });
    }
    Ok(len.div_ceil(size))
}

/// A permutation of chunk indices, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOrder(Vec<usize>);

impl ChunkOrder {
    /// The order that leaves `count` chunks in place.
    pub fn identity(count: usize) -> Self {
        Self((0..count).collect())
    }

    /// Draws an order for `count` chunks from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkOrder`] if the source does not return a
    /// permutation of `0..count`.
    pub fn shuffled<S: RandomSource + ?Sized>(count: usize, source: &mut S) -> Result<Self> {
        let mut indices: Vec<usize> = (0..count).collect();
        source.shuffle(&mut indices);
        Self::from_indices(indices)
    }

    /// Validates an explicit list of source indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkOrder`] unless every index in
    /// `0..indices.len()` appears exactly once.
    pub fn from_indices(indices: Vec<usize>) -> Result<Self> {
        let count = indices.len();
        let mut seen = vec![false; count];
        for &index in &indices {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::InvalidChunkOrder { count }),
            }
        }
        Ok(Self(indices))
    }

    /// Source indices in output order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of chunks the order permutes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for an order over zero chunks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when no chunk moves.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(position, &index)| position == index)
    }

    fn check_covers(&self, len: usize, size: usize) -> Result<()> {
        let expected = chunk_count(len, size)?;
        if self.len() != expected {
            return Err(Error::ChunkCountMismatch {
                expected,
                actual: self.len(),
            });
        }
        Ok(())
    }
}

/// Concatenates the chunks of `data` in the sequence given by `order`.
///
/// # Parameters
///
/// * `data` - Unshuffled bytes
/// * `size` - Chunk size in bytes
/// * `order` - Source chunk index for each output position
///
/// # Returns
///
/// A buffer of the same length as `data` holding the reordered chunks.
///
/// # Errors
///
/// Returns an error if `size` is zero or `order` does not have exactly one
/// entry per chunk of `data`.
pub fn flatten(data: &[u8], size: usize, order: &ChunkOrder) -> Result<Vec<u8>> {
    order.check_covers(data.len(), size)?;

    let chunks: Vec<&[u8]> = data.chunks(size).collect();
    let mut flat = Vec::with_capacity(data.len());
    for &index in order.as_slice() {
        flat.extend_from_slice(chunks[index]);
    }
    Ok(flat)
}

/// Inverts [`flatten`]: puts every chunk of `shuffled` back at its source index.
///
/// # Errors
///
/// Returns an error if `size` is zero or `order` does not have exactly one
/// entry per chunk of `shuffled`.
pub fn restore(shuffled: &[u8], size: usize, order: &ChunkOrder) -> Result<Vec<u8>> {
    order.check_covers(shuffled.len(), size)?;

    let len = shuffled.len();
    let mut restored = vec![0u8; len];
    let mut offset = 0;
    for &index in order.as_slice() {
        let start = index * size;
        let chunk_len = size.min(len - start);
        restored[start..start + chunk_len].copy_from_slice(&shuffled[offset..offset + chunk_len]);
        offset += chunk_len;
    }
    Ok(restored)
}

/// Checks that `output` is `reference` with whole `size`-byte windows rearranged.
///
/// Both buffers are cut into sequential windows and compared as multisets,
/// so the check needs no knowledge of the order that was applied. A trailing
/// partial window only matches if it stayed last.
pub fn is_chunk_permutation(output: &[u8], reference: &[u8], size: usize) -> bool {
    if size == 0 || output.len() != reference.len() {
        return false;
    }

    let mut output_windows: Vec<&[u8]> = output.chunks(size).collect();
    let mut reference_windows: Vec<&[u8]> = reference.chunks(size).collect();
    output_windows.sort_unstable();
    reference_windows.sort_unstable();
    output_windows == reference_windows
}
