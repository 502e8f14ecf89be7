//! Growable scratch buffer for variable-length query results.

use super::error::QueryError;

/// Scratch space shared by every query of one [`QueryContext`](super::QueryContext).
///
/// Contents are never assumed valid across queries, so growing discards the
/// old bytes instead of copying them. The buffer never shrinks.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    bytes: Vec<u8>,
    reallocations: usize,
}

impl ScratchBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            reallocations: 0,
        }
    }

    /// Guarantee that a fill of up to `n` bytes fits without further growth.
    ///
    /// Allocation failure is reported as [`QueryError::OutOfMemory`], which
    /// callers treat as fatal.
    pub fn ensure_capacity(&mut self, n: usize) -> Result<(), QueryError> {
        if n <= self.bytes.len() {
            return Ok(());
        }

        // Release the old allocation first: nothing in it is worth keeping.
        self.bytes = Vec::new();
        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(n)
            .map_err(|_| QueryError::OutOfMemory { requested: n })?;
        fresh.resize(n, 0);
        self.bytes = fresh;
        self.reallocations += 1;
        Ok(())
    }

    /// Usable size in bytes.
    pub const fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of times the buffer has grown.
    pub const fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub(crate) fn slice_mut(&mut self, n: usize) -> &mut [u8] {
        &mut self.bytes[..n]
    }

    pub(crate) fn filled(&self, n: usize) -> &[u8] {
        &self.bytes[..n]
    }
}
