//! Canonical k-mer sets for genome identification.
//!
//! Reads and reference genomes are reduced to sorted lists of canonical
//! k-mers (the smaller of a k-mer and its reverse complement, packed 2 bits
//! per base). Lists are compared with a linear merge to get the fraction of a
//! reference's k-mers present in a read set, or the Jaccard index between
//! two genomes.

pub mod config;
pub mod error;
pub mod io;
pub mod kmer;
pub mod similarity;

pub use config::KmerConfig;
pub use error::{KmerError, Result};
pub use kmer::{KmerSet, KmerSetBuilder};
