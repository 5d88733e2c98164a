//! Sorted, duplicate-free k-mer sets and the builder that produces them

use crate::config::KmerConfig;
use crate::kmer::canonical::CanonicalKmers;
use crate::kmer::encode::encode_sequence;
use tracing::debug;

/// Canonical k-mers in strictly increasing order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KmerSet {
    kmers: Vec<u64>,
}

impl KmerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts and deduplicates arbitrary values
    pub fn from_unsorted(mut kmers: Vec<u64>) -> Self {
        kmers.sort_unstable();
        kmers.dedup();
        Self { kmers }
    }

    /// Wraps values already known to be strictly increasing.
    /// Returns `None` at the first ordering violation.
    pub fn from_sorted(kmers: Vec<u64>) -> Option<Self> {
        if kmers.windows(2).all(|w| w[0] < w[1]) {
            Some(Self { kmers })
        } else {
            None
        }
    }

    pub(crate) fn from_sorted_unchecked(kmers: Vec<u64>) -> Self {
        debug_assert!(kmers.windows(2).all(|w| w[0] < w[1]));
        Self { kmers }
    }

    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.kmers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.kmers.iter()
    }

    pub fn contains(&self, kmer: u64) -> bool {
        self.kmers.binary_search(&kmer).is_ok()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.kmers
    }
}

impl<'a> IntoIterator for &'a KmerSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.kmers.iter()
    }
}

/// Accumulates canonical k-mers from any number of sequences.
///
/// With `min_count > 1` only k-mers seen at least that many times survive
/// [`KmerSetBuilder::finish`], which drops singleton k-mers coming from
/// sequencing errors in read data.
#[derive(Debug)]
pub struct KmerSetBuilder {
    k: usize,
    min_count: u32,
    kmers: Vec<u64>,
    sequences: usize,
}

impl KmerSetBuilder {
    pub fn new(k: usize) -> Self {
        Self::from_config(&KmerConfig::new(k))
    }

    pub fn from_config(config: &KmerConfig) -> Self {
        Self {
            k: config.k,
            min_count: config.min_count,
            kmers: Vec::new(),
            sequences: 0,
        }
    }

    pub fn with_min_count(mut self, min_count: u32) -> Self {
        self.min_count = min_count;
        self
    }

    /// Every occurrence is kept until [`KmerSetBuilder::finish`], so
    /// `min_count` may still be changed after values were pushed
    pub fn push(&mut self, kmer: u64) {
        self.kmers.push(kmer);
    }

    pub fn extend<I: IntoIterator<Item = u64>>(&mut self, kmers: I) {
        for kmer in kmers {
            self.push(kmer);
        }
    }

    /// Extracts and collects the canonical k-mers of one raw sequence
    pub fn add_sequence(&mut self, seq: &[u8]) {
        self.sequences += 1;
        if seq.len() < self.k {
            return;
        }
        let encoded = encode_sequence(seq);
        self.kmers.reserve(seq.len() - self.k + 1);
        let iter = CanonicalKmers::new(&encoded, self.k);
        self.extend(iter);
    }

    /// Number of sequences passed to [`KmerSetBuilder::add_sequence`]
    pub fn sequences(&self) -> usize {
        self.sequences
    }

    /// Number of k-mers collected so far, duplicates included
    pub fn collected(&self) -> usize {
        self.kmers.len()
    }

    pub fn finish(self) -> KmerSet {
        let Self {
            mut kmers,
            min_count,
            ..
        } = self;
        let collected = kmers.len();
        kmers.sort_unstable();

        if min_count <= 1 {
            kmers.dedup();
        } else {
            retain_solid(&mut kmers, min_count as usize);
        }

        debug!(
            "Built k-mer set: {} collected, {} kept (min count {})",
            collected,
            kmers.len(),
            min_count
        );
        KmerSet { kmers }
    }
}

/// Collapses each run of equal values in a sorted vector to one copy,
/// dropping runs shorter than `min_count`
fn retain_solid(sorted: &mut Vec<u64>, min_count: usize) {
    let mut write = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i >= min_count {
            sorted[write] = sorted[i];
            write += 1;
        }
        i = j;
    }
    sorted.truncate(write);
}
