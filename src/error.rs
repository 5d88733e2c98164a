//! Error types for k-mer set extraction and comparison

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kmerid operations
pub type Result<T> = std::result::Result<T, KmerError>;

#[derive(Error, Debug)]
pub enum KmerError {
    /// A file could not be opened, read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A k-mer list line is not a base-10 unsigned integer
    #[error("{}:{line}: cannot parse k-mer value {value:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// A k-mer list is not strictly increasing
    #[error("{}:{line}: k-mer list not sorted/unique ({value} follows {previous})", path.display())]
    Unsorted {
        path: PathBuf,
        line: usize,
        previous: u64,
        value: u64,
    },

    /// k must lie in 1..=32 so that 4^k - 1 fits a u64
    #[error("invalid k-mer length {0} (must be between 1 and 32)")]
    InvalidKmerLength(usize),

    #[error("minimum k-mer count must be at least 1")]
    InvalidMinCount,
}

impl KmerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KmerError::Io {
            path: path.into(),
            source,
        }
    }
}
