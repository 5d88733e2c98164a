//! Flat k-mer list files: one base-10 value per line, strictly increasing.
//!
//! Blank lines and a missing final newline are tolerated. Lists are
//! validated on load, so every [`KmerSet`] handed to the similarity code
//! satisfies the sorted/unique invariant the merge relies on.

use crate::error::{KmerError, Result};
use crate::kmer::KmerSet;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Parse a k-mer list; `path` is only used in error messages
pub fn read_kmer_list<R: BufRead>(reader: R, path: &Path) -> Result<KmerSet> {
    let mut kmers = Vec::new();
    let mut previous: Option<u64> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| KmerError::io(path, e))?;
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        let value: u64 = field.parse().map_err(|_| KmerError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            value: field.to_string(),
        })?;
        if let Some(prev) = previous {
            if value <= prev {
                return Err(KmerError::Unsorted {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    previous: prev,
                    value,
                });
            }
        }
        previous = Some(value);
        kmers.push(value);
    }

    // Order was checked line by line above
    Ok(KmerSet::from_sorted_unchecked(kmers))
}

/// Load a k-mer list file (plain or gzipped)
pub fn load_kmer_list(path: &Path) -> Result<KmerSet> {
    let reader = super::open_reader(path)?;
    let set = read_kmer_list(reader, path)?;
    debug!("Loaded {} k-mers from {}", set.len(), path.display());
    Ok(set)
}

pub fn write_kmer_list<W: Write>(set: &KmerSet, writer: &mut W) -> std::io::Result<()> {
    for kmer in set {
        writeln!(writer, "{}", kmer)?;
    }
    Ok(())
}

/// Write a k-mer set to `path`, replacing any existing file
pub fn save_kmer_list(set: &KmerSet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| KmerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_kmer_list(set, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| KmerError::io(path, e))
}
