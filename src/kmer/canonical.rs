//! Canonical k-mer extraction over an encoded sequence.
//!
//! For a window starting at `j` the forward value is
//! `sum(seq[j+p] * 4^(k-1-p))` and the reverse-complement value is
//! `sum((3 - seq[j+p]) * 4^p)`, i.e. the reverse complement string encoded
//! with the same most-significant-first scheme. The emitted value is the
//! smaller of the two. Both values are rolled one base at a time so each
//! position costs O(1) regardless of k.

use crate::kmer::encode::{encode_sequence, is_valid, max_kmer_value, MAX_K};

/// Iterator over the canonical k-mers of an encoded sequence, left to right.
/// Windows touching an invalid base are skipped.
pub struct CanonicalKmers<'a> {
    seq: &'a [u8],
    k: usize,
    pos: usize,
    valid_run: usize,
    fwd: u64,
    rc: u64,
    mask: u64,
    rc_shift: u32,
}

impl<'a> CanonicalKmers<'a> {
    /// `k` outside `1..=32` yields an empty iterator
    pub fn new(seq: &'a [u8], k: usize) -> Self {
        let usable = k > 0 && k <= MAX_K && k <= seq.len();
        Self {
            seq,
            k,
            pos: if usable { 0 } else { seq.len() },
            valid_run: 0,
            fwd: 0,
            rc: 0,
            mask: max_kmer_value(k.clamp(1, MAX_K)),
            rc_shift: 2 * (k.clamp(1, MAX_K) as u32 - 1),
        }
    }
}

impl Iterator for CanonicalKmers<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.pos < self.seq.len() {
            let code = self.seq[self.pos];
            self.pos += 1;

            if !is_valid(code) {
                self.valid_run = 0;
                self.fwd = 0;
                self.rc = 0;
                continue;
            }

            self.fwd = ((self.fwd << 2) | code as u64) & self.mask;
            self.rc = (self.rc >> 2) | ((3 - code) as u64) << self.rc_shift;
            self.valid_run += 1;

            if self.valid_run >= self.k {
                return Some(self.fwd.min(self.rc));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.pos;
        // Bases still needed before the current run completes a window
        let pending = self.k.saturating_sub(self.valid_run + 1);
        (0, Some(remaining.saturating_sub(pending)))
    }
}

/// Canonical values of every valid window of a raw nucleotide sequence
pub fn canonical_kmers(seq: &[u8], k: usize) -> Vec<u64> {
    let encoded = encode_sequence(seq);
    CanonicalKmers::new(&encoded, k).collect()
}
