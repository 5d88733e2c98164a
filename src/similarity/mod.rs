//! Set similarity between sorted k-mer sets: merge statistics, per-reference
//! reports and pairwise matrices

pub mod matrix;
pub mod merge;
pub mod report;

pub use matrix::JaccardMatrix;
pub use merge::{intersection_count, jaccard_index, similarity_percent, MergeStats};
pub use report::{
    compare_to_reference_files, compare_to_references, identify, rank_by_similarity,
    Identification, JaccardResult, MixingEntry, SimilarityResult,
};
