use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod formats;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rna_sniff=debug,info")
    } else {
        EnvFilter::new("rna_sniff=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Sniff(args) => {
            cli::sniff::run(args, cli.config, cli.format, cli.verbose)?;
        }
        cli::Commands::Metadata(args) => {
            cli::metadata::run(args, cli.config, cli.format, cli.verbose)?;
        }
        cli::Commands::Formats => {
            cli::formats::run(cli.format)?;
        }
    }

    Ok(())
}
