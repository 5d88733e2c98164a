//! Per-reference results, ranking and the mixed-sample check

use crate::error::Result;
use crate::io::kmer_list::load_kmer_list;
use crate::kmer::KmerSet;
use crate::similarity::merge::MergeStats;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Similarity of a query set to one reference set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub reference: String,
    pub similarity: f64,
    pub distance: f64,
    pub shared_kmers: usize,
    pub reference_kmers: usize,
}

impl SimilarityResult {
    pub fn compute(query: &KmerSet, reference: &KmerSet, reference_id: impl Into<String>) -> Self {
        let stats = MergeStats::compute(query, reference);
        Self {
            reference: reference_id.into(),
            similarity: stats.similarity_percent(),
            distance: stats.distance_percent(),
            shared_kmers: stats.intersection,
            reference_kmers: stats.reference_len,
        }
    }
}

/// `similarity<TAB>distance<TAB>reference`
impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}\t{:.6}\t{}", self.similarity, self.distance, self.reference)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JaccardResult {
    pub jaccard: f64,
    pub set_a: String,
    pub set_b: String,
    pub intersection: usize,
    pub union: usize,
}

impl JaccardResult {
    pub fn compute(
        a: &KmerSet,
        b: &KmerSet,
        id_a: impl Into<String>,
        id_b: impl Into<String>,
    ) -> Self {
        let stats = MergeStats::compute(a, b);
        Self {
            jaccard: stats.jaccard(),
            set_a: id_a.into(),
            set_b: id_b.into(),
            intersection: stats.intersection,
            union: stats.union,
        }
    }
}

/// `jaccard<TAB>a<TAB>b`
impl fmt::Display for JaccardResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}\t{}\t{}", self.jaccard, self.set_a, self.set_b)
    }
}

/// Merge the query against each reference independently
pub fn compare_to_references<'a, I>(query: &KmerSet, references: I) -> Vec<SimilarityResult>
where
    I: IntoIterator<Item = (&'a str, &'a KmerSet)>,
{
    references
        .into_iter()
        .map(|(id, reference)| SimilarityResult::compute(query, reference, id))
        .collect()
}

/// Same as [`compare_to_references`] but loads each reference list from
/// disk in turn, so only one reference set is held in memory at a time
pub fn compare_to_reference_files<P: AsRef<Path>>(
    query: &KmerSet,
    references: &[P],
) -> Result<Vec<SimilarityResult>> {
    let mut results = Vec::with_capacity(references.len());
    for path in references {
        let path = path.as_ref();
        let reference = load_kmer_list(path)?;
        let result = SimilarityResult::compute(query, &reference, path.display().to_string());
        debug!(
            "{}: {} of {} reference k-mers shared ({:.4}%)",
            result.reference, result.shared_kmers, result.reference_kmers, result.similarity
        );
        results.push(result);
    }
    Ok(results)
}

/// Sort descending by similarity; equal scores keep their input order
pub fn rank_by_similarity(results: &mut [SimilarityResult]) {
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

/// How one runner-up reference relates to the query and to the top hit.
///
/// `difference = sim(query, reference) - sim(top_hit, reference)`. The top
/// hit alone explains the query's overlap with a related genome when the
/// difference is near zero; a large positive value means the query carries
/// k-mers of that reference that the top hit lacks, which points to a mixed
/// sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MixingEntry {
    pub reference: String,
    pub query_similarity: f64,
    pub top_hit_similarity: f64,
    pub difference: f64,
    pub abs_difference: f64,
}

impl MixingEntry {
    pub fn compute(query_result: &SimilarityResult, top_hit: &KmerSet, reference: &KmerSet) -> Self {
        let top_hit_similarity = MergeStats::compute(top_hit, reference).similarity_percent();
        let difference = query_result.similarity - top_hit_similarity;
        Self {
            reference: query_result.reference.clone(),
            query_similarity: query_result.similarity,
            top_hit_similarity,
            difference,
            abs_difference: difference.abs(),
        }
    }
}

/// `abs_difference<TAB>difference<TAB>reference`
impl fmt::Display for MixingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}\t{:.6}\t{}",
            self.abs_difference, self.difference, self.reference
        )
    }
}

/// Ranked hits for a query plus the optional mixing check against the top hit
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Identification {
    pub hits: Vec<SimilarityResult>,
    pub top_hit: Option<String>,
    pub mixing: Vec<MixingEntry>,
}

/// Rank the query against every reference file and, when `check_mixing`
/// is set, compare the top hit against the remaining references.
/// `top_n` limits the number of reported hits (0 keeps all of them); the
/// mixing check always covers every reference.
pub fn identify<P: AsRef<Path>>(
    query: &KmerSet,
    references: &[P],
    top_n: usize,
    check_mixing: bool,
) -> Result<Identification> {
    let results = compare_to_reference_files(query, references)?;
    // Reload by path, not by the display string stored in the result
    let mut ranked: Vec<(SimilarityResult, &Path)> = results
        .into_iter()
        .zip(references.iter().map(|p| p.as_ref()))
        .collect();
    ranked.sort_by(|a, b| b.0.similarity.total_cmp(&a.0.similarity));

    let Some((best, best_path)) = ranked.first().cloned() else {
        return Ok(Identification::default());
    };
    info!("Top hit: {} ({:.4}% similarity)", best.reference, best.similarity);

    let mut mixing = Vec::new();
    if check_mixing && ranked.len() > 1 {
        let top_set = load_kmer_list(best_path)?;
        for (hit, path) in &ranked[1..] {
            let reference = load_kmer_list(path)?;
            mixing.push(MixingEntry::compute(hit, &top_set, &reference));
        }
        mixing.sort_by(|a, b| b.abs_difference.total_cmp(&a.abs_difference));
    }

    let mut hits: Vec<SimilarityResult> = ranked.into_iter().map(|(hit, _)| hit).collect();
    if top_n > 0 {
        hits.truncate(top_n);
    }

    Ok(Identification {
        hits,
        top_hit: Some(best.reference),
        mixing,
    })
}
