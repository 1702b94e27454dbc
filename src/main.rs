use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod mapping;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("aln_chunker=debug,info")
    } else {
        EnvFilter::new("aln_chunker=warn")
    };

    // Logs go to stderr so they never mix with mapping output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Map(args) => {
            cli::map::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Detect(args) => {
            cli::detect::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
