//! Batch driver configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default batch size at which the parallel driver starts using the pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;
/// Default number of T-exponents handed to one rayon task.
pub const DEFAULT_CHUNK_LEN: usize = 1024;

/// How `par_rys5_roots_weights` splits a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Batches shorter than this run on the calling thread.
    pub parallel_threshold: usize,
    /// T-exponents per task; 0 is treated as 1.
    pub chunk_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }
}

impl BatchConfig {
    /// Never leave the calling thread.
    pub fn sequential() -> Self {
        BatchConfig { parallel_threshold: usize::MAX, ..Self::default() }
    }

    /// Set the batch size at which the pool is used.
    pub fn with_parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }

    /// Set the number of T-exponents per task.
    pub fn with_chunk_len(mut self, n: usize) -> Self {
        self.chunk_len = n;
        self
    }

    /// Chunk length actually used, never zero.
    #[inline]
    pub fn effective_chunk_len(&self) -> usize { self.chunk_len.max(1) }

    /// Whether a batch of `nt` T-exponents should be split across the pool.
    #[inline]
    pub fn runs_parallel(&self, nt: usize) -> bool { nt >= self.parallel_threshold }
}
