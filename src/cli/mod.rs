//! Command-line interface for aln-chunker.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **map**: Stream a file into chunked query-to-subject maps
//! - **detect**: Report the format inferred from a file's first line
//!
//! ## Usage
//!
//! ```text
//! # Map reads to genomes from a SAM file
//! aln-chunker map sample.sam
//!
//! # Pipe from an aligner, smaller chunks, JSON Lines output
//! bowtie2 -x db -U reads.fq | aln-chunker map - -n 100000 --format json
//!
//! # Kraken output cannot be inferred and must be named
//! aln-chunker map sample.kraken.gz --input-format kraken
//!
//! # Which parser would be used?
//! aln-chunker detect hits.b6o
//! ```

use clap::{Parser, Subcommand};

pub mod detect;
pub mod input;
pub mod map;

#[derive(Parser)]
#[command(name = "aln-chunker")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Stream alignment and classification files into query-to-subject maps")]
#[command(
    long_about = "aln-chunker reads SAM, BLAST tabular (b6o), Kraken, Centrifuge or simple two-column map files line by line and groups subjects by query.\n\nLarge files are processed in chunks; a query is never split across two chunks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group subjects by query, chunk by chunk
    Map(map::MapArgs),

    /// Detect the format of an alignment file
    Detect(detect::DetectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
