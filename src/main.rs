mod cli;
mod cli_main;

use clap::Parser;
use cli_main::{Cli, Commands};
use kmerid::KmerConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    // stdout carries k-mer lists and reports, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }

    let start = std::time::Instant::now();

    let result = match cli.command {
        Commands::Reads {
            k,
            input,
            fastq,
            min_count,
            output,
        } => cli::extract::run_reads(
            KmerConfig::new(k).with_min_count(min_count),
            input.as_deref(),
            fastq,
            output.as_deref(),
        ),

        Commands::Refset { k, input, output } => {
            cli::extract::run_refset(KmerConfig::new(k), &input, output.as_deref())
        }

        Commands::Intersect {
            query,
            references,
            rank,
            format,
        } => cli::compare::run_intersect(&query, &references, rank, format),

        Commands::Jaccard { a, b, format } => cli::compare::run_jaccard(&a, &b, format),

        Commands::Matrix {
            sets,
            output,
            format,
        } => cli::compare::run_matrix(&sets, output.as_deref(), format),

        Commands::Identify {
            query,
            references,
            top,
            no_mix,
            format,
        } => cli::compare::run_identify(&query, &references, top, !no_mix, format),
    };

    match result {
        Ok(()) => info!("Completed in {:.2}s", start.elapsed().as_secs_f32()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
