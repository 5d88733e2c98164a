use crate::error::{KmerError, Result};
use crate::kmer::encode::MAX_K;

/// Parameters for building a k-mer set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KmerConfig {
    pub k: usize,
    /// Keep only canonical k-mers seen at least this many times
    pub min_count: u32,
}

impl Default for KmerConfig {
    fn default() -> Self {
        Self { k: 18, min_count: 1 }
    }
}

impl KmerConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    pub fn with_min_count(mut self, min_count: u32) -> Self {
        self.min_count = min_count;
        self
    }

    /// Reject settings the extractor cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 || self.k > MAX_K {
            return Err(KmerError::InvalidKmerLength(self.k));
        }
        if self.min_count == 0 {
            return Err(KmerError::InvalidMinCount);
        }
        Ok(())
    }
}
