//! Nucleotide encoding (A=0, C=1, G=2, T=3, 2 bits per base)

/// Code for any byte that is not A/C/G/T (case-insensitive)
pub const INVALID_BASE: u8 = u8::MAX;

/// Largest k whose canonical values fit in a u64
pub const MAX_K: usize = 32;

#[inline]
pub const fn encode_base(b: u8) -> u8 {
    match b {
        b'A' | b'a' => 0,
        b'C' | b'c' => 1,
        b'G' | b'g' => 2,
        b'T' | b't' => 3,
        _ => INVALID_BASE,
    }
}

#[inline]
pub const fn is_valid(code: u8) -> bool {
    code <= 3
}

/// Encodes a nucleotide sequence, one code per input byte.
/// Invalid symbols map to [`INVALID_BASE`] instead of failing; the
/// extractor skips every window that touches one.
pub fn encode_sequence(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| encode_base(b)).collect()
}

/// Encodes a whole k-mer string, most significant base first.
/// Returns `None` if the k-mer contains an invalid symbol.
pub fn encode_kmer(seq: &str) -> Option<u64> {
    let mut val: u64 = 0;
    for &b in seq.as_bytes() {
        let code = encode_base(b);
        if !is_valid(code) {
            return None;
        }
        val = (val << 2) | code as u64;
    }
    Some(val)
}

/// Decodes a packed k-mer back to its string form
pub fn decode_kmer(mut val: u64, k: usize) -> String {
    let mut bases = vec![b'A'; k];
    for slot in bases.iter_mut().rev() {
        *slot = b"ACGT"[(val & 0b11) as usize];
        val >>= 2;
    }
    // Only ACGT bytes were written
    String::from_utf8(bases).unwrap_or_default()
}

/// Largest value a k-mer of length k can take (4^k - 1)
pub fn max_kmer_value(k: usize) -> u64 {
    if k >= MAX_K {
        u64::MAX
    } else {
        (1u64 << (2 * k)) - 1
    }
}

/// Reverse complement of a DNA string; non-ACGT symbols are kept in place
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            'a' => 't',
            't' => 'a',
            'c' => 'g',
            'g' => 'c',
            other => other,
        })
        .collect()
}
