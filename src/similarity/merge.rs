//! Linear merge of two sorted k-mer sets.
//!
//! Both inputs must be strictly increasing (every [`KmerSet`] is). One pass
//! with two cursors yields the intersection size, and the union size falls
//! out of the same pass as the number of merge steps plus whatever tail is
//! left in either set.

use crate::kmer::KmerSet;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// |A|
    pub query_len: usize,
    /// |B|, the reference set
    pub reference_len: usize,
    pub intersection: usize,
    pub union: usize,
}

impl MergeStats {
    pub fn compute(query: &KmerSet, reference: &KmerSet) -> Self {
        Self::from_slices(query.as_slice(), reference.as_slice())
    }

    pub fn from_slices(a: &[u64], b: &[u64]) -> Self {
        let (mut i, mut j) = (0, 0);
        let mut intersection = 0;
        let mut steps = 0;

        while i < a.len() && j < b.len() {
            steps += 1;
            if a[i] == b[j] {
                i += 1;
                j += 1;
                intersection += 1;
            } else if a[i] > b[j] {
                j += 1;
            } else {
                i += 1;
            }
        }

        Self {
            query_len: a.len(),
            reference_len: b.len(),
            intersection,
            union: steps + (a.len() - i) + (b.len() - j),
        }
    }

    /// Percentage of the reference's k-mers also present in the query.
    /// Normalized by the reference size, so not symmetric. An empty
    /// reference gives 0.
    pub fn similarity_percent(&self) -> f64 {
        if self.reference_len == 0 {
            return 0.0;
        }
        self.intersection as f64 / self.reference_len as f64 * 100.0
    }

    pub fn distance_percent(&self) -> f64 {
        100.0 - self.similarity_percent()
    }

    /// Intersection over union, 0 when both sets are empty
    pub fn jaccard(&self) -> f64 {
        if self.union == 0 {
            return 0.0;
        }
        self.intersection as f64 / self.union as f64
    }
}

pub fn intersection_count(a: &KmerSet, b: &KmerSet) -> usize {
    MergeStats::compute(a, b).intersection
}

pub fn jaccard_index(a: &KmerSet, b: &KmerSet) -> f64 {
    MergeStats::compute(a, b).jaccard()
}

/// Percentage of `reference` found in `query`
pub fn similarity_percent(query: &KmerSet, reference: &KmerSet) -> f64 {
    MergeStats::compute(query, reference).similarity_percent()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> KmerSet {
        KmerSet::from_unsorted(values.to_vec())
    }

    #[test]
    fn test_worked_example() {
        let reads = set(&[1, 2, 3, 5]);
        let reference = set(&[2, 3, 4]);
        let stats = MergeStats::compute(&reads, &reference);

        assert_eq!(stats.intersection, 2);
        assert_eq!(stats.union, 5);
        assert!((stats.jaccard() - 0.4).abs() < 1e-12);
        assert!((stats.similarity_percent() - 66.666_666).abs() < 1e-3);
        assert!((stats.distance_percent() - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn test_union_matches_inclusion_exclusion() {
        let a = set(&[0, 4, 8, 12, 16, 20]);
        let b = set(&[1, 4, 9, 16, 25, 36, 49]);
        let stats = MergeStats::compute(&a, &b);
        assert_eq!(stats.intersection, 2);
        assert_eq!(stats.union, a.len() + b.len() - stats.intersection);
    }

    #[test]
    fn test_similarity_is_not_symmetric() {
        let reads = set(&[1, 2, 3, 5]);
        let reference = set(&[2, 3, 4]);
        let forward = similarity_percent(&reads, &reference);
        let backward = similarity_percent(&reference, &reads);
        assert!((forward - backward).abs() > 1.0);
        assert!((backward - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_symmetry_and_identity() {
        let a = set(&[3, 6, 9, 12]);
        let b = set(&[2, 3, 5, 7, 11, 12]);
        assert_eq!(jaccard_index(&a, &b), jaccard_index(&b, &a));
        assert_eq!(jaccard_index(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_sets() {
        let a = set(&[1, 3, 5]);
        let b = set(&[2, 4, 6]);
        assert_eq!(intersection_count(&a, &b), 0);
        assert_eq!(jaccard_index(&a, &b), 0.0);
        assert_eq!(similarity_percent(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_sets_are_defined() {
        let empty = KmerSet::new();
        let a = set(&[1, 2]);

        let stats = MergeStats::compute(&a, &empty);
        assert_eq!(stats.similarity_percent(), 0.0);
        assert_eq!(stats.distance_percent(), 100.0);
        assert_eq!(stats.jaccard(), 0.0);
        assert_eq!(stats.union, 2);

        let both = MergeStats::compute(&empty, &empty);
        assert_eq!(both.union, 0);
        assert_eq!(both.jaccard(), 0.0);
        assert_eq!(both.similarity_percent(), 0.0);

        // Empty query against a real reference
        assert_eq!(similarity_percent(&empty, &a), 0.0);
    }

    #[test]
    fn test_reference_subset_of_query() {
        let reads = set(&[1, 2, 3, 4, 5, 6]);
        let reference = set(&[2, 4, 6]);
        let stats = MergeStats::compute(&reads, &reference);
        assert_eq!(stats.similarity_percent(), 100.0);
        assert_eq!(stats.distance_percent(), 0.0);
        assert!((stats.jaccard() - 0.5).abs() < 1e-12);
    }
}
