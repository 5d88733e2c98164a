//! Pairwise Jaccard matrix over a group of named k-mer sets

use crate::kmer::KmerSet;
use crate::similarity::merge::jaccard_index;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JaccardMatrix {
    pub names: Vec<String>,
    /// Row-major, `values[i][j] == values[j][i]`
    pub values: Vec<Vec<f64>>,
}

impl JaccardMatrix {
    /// Each unordered pair is merged once and mirrored
    pub fn compute(sets: &[(String, KmerSet)]) -> Self {
        let n = sets.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let jaccard = jaccard_index(&sets[i].1, &sets[j].1);
                values[i][j] = jaccard;
                values[j][i] = jaccard;
            }
        }
        Self {
            names: sets.iter().map(|(name, _)| name.clone()).collect(),
            values,
        }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Header row of names, then one row per set starting with its name
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for name in &self.names {
            write!(writer, "\t{}", name)?;
        }
        writeln!(writer)?;
        for (name, row) in self.names.iter().zip(&self.values) {
            write!(writer, "{}", name)?;
            for value in row {
                write!(writer, "\t{:.6}", value)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
