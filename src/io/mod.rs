//! Input readers for sequence data and the flat k-mer list format

pub mod fasta;
pub mod fastq;
pub mod kmer_list;

use crate::error::{KmerError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a file for reading, handles gzipped files automatically
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| KmerError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Open a file, or stdin when no path is given
pub fn open_reader_or_stdin(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) => open_reader(p),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Strip a trailing `\n` / `\r\n`
pub(crate) fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}

/// Whitespace-only lines separate records and carry no sequence
pub(crate) fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Byte lines without their line ending. Sequence files are not required to
/// be UTF-8; stray bytes are left for the encoder to treat as invalid bases.
pub(crate) fn byte_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            let len = trim_line_end(&bytes).len();
            bytes.truncate(len);
            bytes
        })
    })
}
