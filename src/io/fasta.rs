// src/io/fasta.rs
use crate::error::{KmerError, Result};
use crate::io::{byte_lines, open_reader};
use std::io::{self, BufRead};
use std::path::Path;

/// Concatenate every sequence line of a FASTA stream into one sequence.
/// Lines starting with `>` are headers and are skipped, so a multi-record
/// file is treated as a single contiguous sequence.
pub fn read_concatenated_sequence<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut seq = Vec::new();
    for line in byte_lines(reader) {
        let line = line?;
        if line.first() == Some(&b'>') {
            continue;
        }
        seq.extend_from_slice(&line);
    }
    Ok(seq)
}

/// Load a FASTA(.gz) file as one concatenated sequence
pub fn load_fasta_sequence(path: &Path) -> Result<Vec<u8>> {
    let reader = open_reader(path)?;
    read_concatenated_sequence(reader).map_err(|e| KmerError::io(path, e))
}
