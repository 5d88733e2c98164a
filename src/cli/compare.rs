//! `intersect`, `jaccard`, `matrix` and `identify`: compare k-mer lists

use crate::cli::create_output;
use crate::cli_main::OutputFormat;
use anyhow::{Context, Result};
use kmerid::io::kmer_list::load_kmer_list;
use kmerid::similarity::{
    compare_to_reference_files, identify, rank_by_similarity, JaccardMatrix, JaccardResult,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = create_output(None)?;
    serde_json::to_writer_pretty(&mut out, value).context("Failed writing JSON")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn run_intersect(
    query: &Path,
    references: &[PathBuf],
    rank: bool,
    format: OutputFormat,
) -> Result<()> {
    let query_set = load_kmer_list(query)?;
    info!(
        "Comparing {} ({} k-mers) against {} reference(s)",
        query.display(),
        query_set.len(),
        references.len()
    );

    let mut results = compare_to_reference_files(&query_set, references)?;
    if rank {
        rank_by_similarity(&mut results);
    }

    match format {
        OutputFormat::Json => write_json(&results),
        OutputFormat::Tsv => {
            let mut out = create_output(None)?;
            for result in &results {
                writeln!(out, "{}", result)?;
            }
            out.flush()?;
            Ok(())
        }
    }
}

pub fn run_jaccard(a: &Path, b: &Path, format: OutputFormat) -> Result<()> {
    let set_a = load_kmer_list(a)?;
    let set_b = load_kmer_list(b)?;
    let result = JaccardResult::compute(
        &set_a,
        &set_b,
        a.display().to_string(),
        b.display().to_string(),
    );
    info!(
        "{} shared of {} distinct k-mers",
        result.intersection, result.union
    );

    match format {
        OutputFormat::Json => write_json(&result),
        OutputFormat::Tsv => {
            let mut out = create_output(None)?;
            writeln!(out, "{}", result)?;
            out.flush()?;
            Ok(())
        }
    }
}

/// Names are file stems with any `_kmers` suffix dropped, so
/// `salmonella_LT2_kmers.txt` shows up as `salmonella_LT2`
fn set_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match stem.strip_suffix("_kmers") {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => stem,
    }
}

pub fn run_matrix(sets: &[PathBuf], output: Option<&Path>, format: OutputFormat) -> Result<()> {
    info!("Loading {} k-mer lists for the pairwise matrix", sets.len());
    let loaded = sets
        .iter()
        .map(|path| Ok((set_name(path), load_kmer_list(path)?)))
        .collect::<Result<Vec<_>>>()?;

    let matrix = JaccardMatrix::compute(&loaded);

    let mut out = create_output(output)?;
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &matrix).context("Failed writing JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => matrix.write_tsv(&mut out).context("Failed writing matrix")?,
    }
    out.flush()?;
    if let Some(path) = output {
        info!("Wrote {}x{} matrix to {}", sets.len(), sets.len(), path.display());
    }
    Ok(())
}

pub fn run_identify(
    query: &Path,
    references: &[PathBuf],
    top: usize,
    check_mixing: bool,
    format: OutputFormat,
) -> Result<()> {
    let query_set = load_kmer_list(query)?;
    let report = identify(&query_set, references, top, check_mixing)?;

    match format {
        OutputFormat::Json => write_json(&report),
        OutputFormat::Tsv => {
            let mut out = create_output(None)?;
            writeln!(out, "#similarity\tdistance\tfile")?;
            for hit in &report.hits {
                writeln!(out, "{}", hit)?;
            }
            if let Some(top_hit) = &report.top_hit {
                if check_mixing {
                    writeln!(out)?;
                    writeln!(out, "#mixing analysis against top hit {}", top_hit)?;
                    writeln!(out, "#abs_diff\tsim(query,file)-sim(top_hit,file)\tfile")?;
                    for entry in &report.mixing {
                        writeln!(out, "{}", entry)?;
                    }
                }
            }
            out.flush()?;
            Ok(())
        }
    }
}
