//! Command-line interface for rna-sniff.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **sniff**: Detect the format of one or more files
//! - **metadata**: Count lines and records of a file
//! - **formats**: List the supported datatypes
//!
//! ## Usage
//!
//! ```text
//! # Detect formats
//! rna-sniff sniff hairpin.dbn trna.ct
//!
//! # Check a file against one datatype only
//! rna-sniff sniff --datatype ct trna.txt
//!
//! # Metadata, skipped for files over 1 MiB
//! rna-sniff metadata hairpin.dbn --max-metadata-size 1048576
//!
//! # JSON output for scripting
//! cat hairpin.dbn | rna-sniff --format json sniff -
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::SniffConfig;
use crate::core::source::{FileSource, MemorySource, TextSource};
use crate::formats::FileFormat;

pub mod formats;
pub mod metadata;
pub mod sniff;

#[derive(Parser)]
#[command(name = "rna-sniff")]
#[command(version)]
#[command(about = "Detect and summarize RNA secondary structure files")]
#[command(
    long_about = "rna-sniff recognizes Dot-Bracket Notation (.dbn), Connectivity Table (.ct) and RNAML (.rnaml) files by their content.\n\nIt reports the detected datatype with its EDAM format tag, and the line and record counts a data manager stores as metadata."
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

    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the datatype of one or more files
    Sniff(sniff::SniffArgs),

    /// Compute metadata (line and record counts) for a file
    Metadata(metadata::MetadataArgs),

    /// List supported datatypes
    Formats,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Datatype selected by extension on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DatatypeArg {
    Dbn,
    Ct,
    Rnaml,
}

impl From<DatatypeArg> for FileFormat {
    fn from(arg: DatatypeArg) -> Self {
        match arg {
            DatatypeArg::Dbn => FileFormat::DotBracket,
            DatatypeArg::Ct => FileFormat::ConnectivityTable,
            DatatypeArg::Rnaml => FileFormat::Rnaml,
        }
    }
}

/// Load the configuration file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SniffConfig> {
    match path {
        Some(path) => Ok(SniffConfig::load_from_file(path)?),
        None => Ok(SniffConfig::default()),
    }
}

/// Open an input path; `-` reads all of stdin into memory
pub fn open_source(input: &Path) -> anyhow::Result<Box<dyn TextSource>> {
    if input.as_os_str() == "-" {
        let mut content = Vec::new();
        std::io::stdin().read_to_end(&mut content)?;
        return Ok(Box::new(MemorySource::new(content)));
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    Ok(Box::new(FileSource::new(input)))
}
