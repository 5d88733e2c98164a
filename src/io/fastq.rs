// src/io/fastq.rs
/// One FASTQ record as raw bytes, line endings stripped
#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: Vec<u8>,
    pub sequence: Vec<u8>,
    pub plus: Vec<u8>,
    pub quality: Vec<u8>,
}

use crate::io::{byte_lines, is_blank};
use std::io::{self, BufRead};

/// Stream FASTQ records; only the sequence line of each record is
/// used for k-mer extraction. A truncated final record is dropped.
pub fn stream_fastq_records<R: BufRead>(
    reader: R,
) -> FastqStreamParser<impl Iterator<Item = io::Result<Vec<u8>>>> {
    FastqStreamParser {
        lines: byte_lines(reader),
    }
}

/// Iterator adaptor to handle streaming FASTQ parsing
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    lines: I,
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    type Item = io::Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Blank lines between or after records are not headers
        let header = loop {
            match self.lines.next()? {
                Ok(line) if is_blank(&line) => continue,
                Ok(line) => break line,
                Err(e) => return Some(Err(e)),
            }
        };

        let mut rest = [Vec::new(), Vec::new(), Vec::new()];
        for slot in rest.iter_mut() {
            match self.lines.next()? {
                Ok(line) => *slot = line,
                Err(e) => return Some(Err(e)),
            }
        }
        let [sequence, plus, quality] = rest;

        Some(Ok(FastqRecord {
            header,
            sequence,
            plus,
            quality,
        }))
    }
}

/// Stream raw reads, one nucleotide string per line, skipping blank lines.
/// This is the format produced by `sed -n '2~4p'` on a FASTQ file.
pub fn stream_raw_reads<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    byte_lines(reader).filter(|line| match line {
        Ok(l) => !is_blank(l),
        Err(_) => true,
    })
}
