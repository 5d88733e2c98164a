//! `reads` and `refset`: build a k-mer list from sequence data

use crate::cli::create_output;
use anyhow::{Context, Result};
use kmerid::io::fasta::load_fasta_sequence;
use kmerid::io::fastq::{stream_fastq_records, stream_raw_reads};
use kmerid::io::kmer_list::write_kmer_list;
use kmerid::io::open_reader_or_stdin;
use kmerid::{KmerConfig, KmerSet, KmerSetBuilder};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

pub fn run_reads(
    config: KmerConfig,
    input: Option<&Path>,
    fastq: bool,
    output: Option<&Path>,
) -> Result<()> {
    config.validate()?;
    let source = input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    info!(
        "Extracting {}-mers from reads in {} (min count {})",
        config.k, source, config.min_count
    );

    let reader = open_reader_or_stdin(input)?;
    let mut builder = KmerSetBuilder::from_config(&config);

    if fastq {
        for record in stream_fastq_records(reader) {
            let record = record.with_context(|| format!("Failed reading FASTQ from {}", source))?;
            builder.add_sequence(&record.sequence);
        }
    } else {
        for read in stream_raw_reads(reader) {
            let read = read.with_context(|| format!("Failed reading reads from {}", source))?;
            builder.add_sequence(&read);
        }
    }

    info!(
        "Processed {} reads, {} k-mers collected",
        builder.sequences(),
        builder.collected()
    );
    let set = builder.finish();
    if set.is_empty() {
        warn!("No k-mers passed extraction for {}", source);
    }
    write_set(&set, output)
}

pub fn run_refset(config: KmerConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    config.validate()?;
    info!("Extracting {}-mers from reference {}", config.k, input.display());

    let seq = load_fasta_sequence(input)?;
    if seq.len() < config.k {
        warn!(
            "Reference {} is shorter ({} bp) than k = {}",
            input.display(),
            seq.len(),
            config.k
        );
    }

    let mut builder = KmerSetBuilder::from_config(&config);
    builder.add_sequence(&seq);
    let set = builder.finish();
    info!("{} bp reference, {} unique canonical k-mers", seq.len(), set.len());
    write_set(&set, output)
}

fn write_set(set: &KmerSet, output: Option<&Path>) -> Result<()> {
    let mut writer = create_output(output)?;
    write_kmer_list(set, &mut writer)
        .and_then(|_| writer.flush())
        .context("Failed writing k-mer list")?;
    if let Some(path) = output {
        info!("Wrote {} k-mers to {}", set.len(), path.display());
    }
    Ok(())
}
