use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kmerid", version, about = "K-mer based identification of reads against reference genomes", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sorted canonical k-mer list of a read set
    Reads {
        /// K-mer length (1-32)
        #[arg(short, long = "kmer-len", default_value_t = 18)]
        k: usize,

        /// Reads file, plain or .gz; one sequence per line unless --fastq.
        /// Reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Parse the input as FASTQ and use only the sequence lines
        #[arg(long)]
        fastq: bool,

        /// Keep only k-mers seen at least this many times across all reads
        #[arg(long, default_value_t = 2)]
        min_count: u32,

        /// Output k-mer list (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the sorted canonical k-mer list of a reference genome
    Refset {
        /// K-mer length (1-32)
        #[arg(short, long = "kmer-len", default_value_t = 18)]
        k: usize,

        /// FASTA(.gz) file; all records are joined into one sequence
        input: PathBuf,

        /// Output k-mer list (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Percentage of each reference's k-mers found in the query list
    Intersect {
        /// Query (read set) k-mer list
        query: PathBuf,

        /// Reference k-mer lists
        #[arg(required = true)]
        references: Vec<PathBuf>,

        /// Sort output by decreasing similarity
        #[arg(long)]
        rank: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },

    /// Jaccard index between two k-mer lists
    Jaccard {
        a: PathBuf,
        b: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },

    /// Pairwise Jaccard matrix of a group of k-mer lists
    Matrix {
        /// K-mer lists to compare
        #[arg(required = true, num_args = 2..)]
        sets: Vec<PathBuf>,

        /// Output TSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },

    /// Rank references against a query list and check for a mixed sample
    Identify {
        /// Query (read set) k-mer list
        query: PathBuf,

        /// Reference k-mer lists
        #[arg(required = true)]
        references: Vec<PathBuf>,

        /// Number of hits to report (0 = all)
        #[arg(long, default_value_t = 0)]
        top: usize,

        /// Skip the mixed-sample comparison against the top hit
        #[arg(long)]
        no_mix: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
}
