//! K-mer processing: base encoding, canonical extraction and set building

pub mod canonical;
pub mod encode;
pub mod kmer_set;

pub use canonical::{canonical_kmers, CanonicalKmers};
pub use encode::{decode_kmer, encode_kmer, encode_sequence, reverse_complement};
pub use kmer_set::{KmerSet, KmerSetBuilder};
