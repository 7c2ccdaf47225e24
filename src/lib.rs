//! # rna-sniff
//!
//! Format recognition and metadata extraction for RNA secondary structure files.
//!
//! Data managers receive structure files with missing or misleading extensions.
//! `rna-sniff` classifies them by content instead: a small set of positional line
//! grammars decides whether a file is Dot-Bracket Notation, a Connectivity Table
//! or RNAML, and per-format scanners produce the line and record counts stored
//! as dataset metadata.
//!
//! ## Features
//!
//! - **Dot-Bracket sniffing**: header, sequence and balanced structure of the first record
//! - **Connectivity Table sniffing**: tab- and space-separated layouts, bounded scan
//! - **RNAML recognition**: XML prolog and root element check, pluggable inspector
//! - **Metadata**: line and record counts, skipped above an optional size limit
//!
//! ## Example
//!
//! ```rust
//! use rna_sniff::{detect_format, FileFormat, MemorySource, Registry};
//!
//! let ct = MemorySource::from_lines(&[
//!     "5\tenergy = -12.3\tseqname",
//!     "1\tG\t0\t2\t0\t1",
//!     "2\tA\t1\t3\t0\t2",
//! ]);
//!
//! let registry = Registry::default();
//! let format = detect_format(&registry, &ct, None).unwrap();
//! assert_eq!(format, FileFormat::ConnectivityTable);
//! assert_eq!(format.edam_format(), "format_3309");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Verdicts, metadata summaries and input sources
//! - [`parsing`]: Line patterns and positional classifiers
//! - [`formats`]: Datatypes, registry and format detection
//! - [`config`]: Sniffing configuration
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod formats;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::SniffConfig;
pub use core::source::{FileSource, MemorySource, TextSource};
pub use core::types::*;
pub use formats::detection::{detect_format, FormatError};
pub use formats::{Datatype, FileFormat, Registry, SniffError};
