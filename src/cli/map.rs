use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::input::open_input;
use crate::cli::OutputFormat;
use crate::core::types::AlignFormat;
use crate::mapping::stream::{stream_chunks, MalformedPolicy, StreamConfig, DEFAULT_CHUNK_SIZE};
use crate::mapping::QueryMap;

#[derive(Args)]
pub struct MapArgs {
    /// Alignment or classification file (.gz/.bgz are decompressed)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format: map, b6o, sam, kraken or centrifuge
    /// (inferred from the first line by default)
    #[arg(long)]
    pub input_format: Option<AlignFormat>,

    /// Approximate number of records per chunk
    #[arg(short = 'n', long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Skip malformed lines with a warning instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

/// Execute map subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be opened, its format cannot be
/// determined, or a malformed line is found (unless skipping).
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reader = open_input(&args.input)?;

    let config = StreamConfig {
        format: args.input_format,
        chunk_size: args.chunk_size,
        malformed: if args.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        },
    };
    let mut stream = stream_chunks(reader, config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if matches!(format, OutputFormat::Tsv) {
        writeln!(out, "chunk\tquery\tsubject")?;
    }

    let mut queries = 0;
    for (i, chunk) in stream.by_ref().enumerate() {
        let chunk = chunk.with_context(|| format!("Failed to read {}", args.input.display()))?;
        queries += chunk.len();

        // Chunks are numbered from 1 for users
        let index = i + 1;
        match format {
            OutputFormat::Text => write_text(&mut out, &chunk)?,
            OutputFormat::Json => write_json(&mut out, index, &chunk)?,
            OutputFormat::Tsv => write_tsv(&mut out, index, &chunk)?,
        }
    }
    out.flush()?;

    if verbose {
        let format_name = stream.format().map_or("none", AlignFormat::display_name);
        eprintln!(
            "Read {} records ({format_name}) into {} chunks covering {queries} queries",
            stream.records(),
            stream.chunks(),
        );
        if stream.skipped() > 0 {
            eprintln!("Skipped {} malformed lines", stream.skipped());
        }
    }

    Ok(())
}

/// Queries and their subjects in sorted order, for stable output
fn sorted(chunk: &QueryMap) -> BTreeMap<&str, Vec<&str>> {
    chunk
        .iter()
        .map(|(query, subjects)| {
            let mut subjects: Vec<&str> = subjects.iter().map(String::as_str).collect();
            subjects.sort_unstable();
            (query.as_str(), subjects)
        })
        .collect()
}

fn write_text(out: &mut impl Write, chunk: &QueryMap) -> io::Result<()> {
    for (query, subjects) in sorted(chunk) {
        writeln!(out, "{query}\t{}", subjects.join(","))?;
    }
    Ok(())
}

fn write_tsv(out: &mut impl Write, index: usize, chunk: &QueryMap) -> io::Result<()> {
    for (query, subjects) in sorted(chunk) {
        for subject in subjects {
            writeln!(out, "{index}\t{query}\t{subject}")?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, index: usize, chunk: &QueryMap) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "chunk": index,
        "queries": sorted(chunk),
    });
    writeln!(out, "{}", serde_json::to_string(&output)?)?;
    Ok(())
}
