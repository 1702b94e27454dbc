use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;

use crate::cli::input::open_input;
use crate::cli::OutputFormat;
use crate::parsing::detect::infer_format;

#[derive(Args)]
pub struct DetectArgs {
    /// Alignment or classification file (.gz/.bgz are decompressed)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute detect subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, is empty, or its format
/// cannot be determined from the first line.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DetectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reader = open_input(&args.input)?;

    let line = reader
        .lines()
        .next()
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("{} is empty", args.input.display()))?;

    let detected = infer_format(&line)?;

    if verbose {
        eprintln!("Detected {} from the first line", detected.display_name());
    }

    match format {
        OutputFormat::Text => println!("{}", detected.code()),
        OutputFormat::Tsv => {
            println!("format\tname");
            println!("{}\t{}", detected.code(), detected.display_name());
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "format": detected,
                "name": detected.display_name(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
