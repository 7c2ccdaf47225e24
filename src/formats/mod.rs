//! Datatypes for RNA secondary structure files.
//!
//! Each format implements [`Datatype`]: a sniffer returning a [`Verdict`] and a
//! metadata extractor returning a [`MetadataSummary`]. The [`Registry`] holds
//! one instance of each in sniff order.
//!
//! | Format | Extension | EDAM |
//! |--------|-----------|------|
//! | Dot-Bracket Notation | `dbn` | `format_1457` |
//! | Connectivity Table | `ct` | `format_3309` |
//! | RNAML | `rnaml` | `format_3311` |
//!
//! ## Example
//!
//! ```rust
//! use rna_sniff::core::source::MemorySource;
//! use rna_sniff::formats::{Datatype, Registry};
//! use rna_sniff::formats::dbn::DotBracket;
//!
//! let source = MemorySource::from_lines(&[">h1", "CCCaaaGGG", "(((...)))"]);
//! assert!(DotBracket::default().sniff(&source).unwrap().is_accepted());
//!
//! let registry = Registry::default();
//! let format = rna_sniff::formats::detection::detect_format(&registry, &source, None).unwrap();
//! assert_eq!(format.extension(), "dbn");
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::config::SniffConfig;
use crate::core::source::TextSource;
use crate::core::types::{Column, MetadataField, MetadataStore, MetadataSummary, Verdict};

pub mod ct;
pub mod dbn;
pub mod detection;
pub mod rnaml;
pub mod xml;

#[derive(Error, Debug)]
pub enum SniffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported RNA structure formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// Dot-Bracket Notation
    DotBracket,
    /// Connectivity Table
    ConnectivityTable,
    /// RNAML XML
    Rnaml,
}

impl FileFormat {
    /// All formats, most specific first
    pub const SNIFF_ORDER: [FileFormat; 3] = [
        FileFormat::Rnaml,
        FileFormat::ConnectivityTable,
        FileFormat::DotBracket,
    ];

    /// File extension stored by the host
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::DotBracket => "dbn",
            FileFormat::ConnectivityTable => "ct",
            FileFormat::Rnaml => "rnaml",
        }
    }

    /// EDAM ontology format tag
    #[must_use]
    pub fn edam_format(self) -> &'static str {
        match self {
            FileFormat::DotBracket => "format_1457",
            FileFormat::ConnectivityTable => "format_3309",
            FileFormat::Rnaml => "format_3311",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            FileFormat::DotBracket => "Dot-Bracket Notation",
            FileFormat::ConnectivityTable => "Connectivity Table",
            FileFormat::Rnaml => "RNAML",
        }
    }

    /// Look up a format by its extension, case-insensitive
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        Self::SNIFF_ORDER
            .into_iter()
            .find(|format| format.extension() == ext)
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sniffing and metadata capability of one format
pub trait Datatype: Send + Sync {
    fn format(&self) -> FileFormat;

    /// Classify the source, distinguishing too-short input (`Unknown`)
    ///
    /// # Errors
    ///
    /// Returns `SniffError::Io` if the source cannot be read.
    fn probe(&self, source: &dyn TextSource) -> Result<Verdict, SniffError>;

    /// Classify the source; `Unknown` is reported as `Rejected`
    ///
    /// # Errors
    ///
    /// Returns `SniffError::Io` if the source cannot be read.
    fn sniff(&self, source: &dyn TextSource) -> Result<Verdict, SniffError> {
        Ok(self.probe(source)?.resolve())
    }

    /// Count lines and records.
    ///
    /// `limit` is the optional metadata size limit in bytes; formats that honor
    /// it return [`MetadataSummary::omitted`] for larger files.
    ///
    /// # Errors
    ///
    /// Returns `SniffError::Io` if the source cannot be read.
    fn extract_metadata(
        &self,
        source: &dyn TextSource,
        limit: Option<u64>,
    ) -> Result<MetadataSummary, SniffError>;

    /// Metadata fields this format populates
    fn metadata_fields(&self) -> &'static [MetadataField];

    /// Extract metadata and write it into caller-owned storage
    ///
    /// # Errors
    ///
    /// Returns `SniffError::Io` if the source cannot be read.
    fn set_meta(
        &self,
        source: &dyn TextSource,
        store: &mut dyn MetadataStore,
        limit: Option<u64>,
    ) -> Result<(), SniffError> {
        let summary = self.extract_metadata(source, limit)?;
        summary.write_to(self.metadata_fields(), store);
        Ok(())
    }

    /// Tabular column schema, for formats that have one
    fn columns(&self) -> Option<&'static [Column]> {
        None
    }
}

/// The datatypes known to this crate, in sniff order
pub struct Registry {
    datatypes: Vec<Box<dyn Datatype>>,
}

impl Registry {
    #[must_use]
    pub fn new(config: &SniffConfig) -> Self {
        let datatypes = FileFormat::SNIFF_ORDER
            .into_iter()
            .map(|format| -> Box<dyn Datatype> {
                match format {
                    FileFormat::Rnaml => Box::new(rnaml::Rnaml::new(config.xml_prefix_bytes)),
                    FileFormat::ConnectivityTable => Box::new(
                        ct::ConnectivityTable::new(config.ct_max_lines)
                            .with_max_line_bytes(config.max_line_bytes),
                    ),
                    FileFormat::DotBracket => {
                        Box::new(dbn::DotBracket::new(config.max_line_bytes))
                    }
                }
            })
            .collect();
        Self { datatypes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Datatype + 'static)> {
        self.datatypes.iter().map(|datatype| datatype.as_ref())
    }

    #[must_use]
    pub fn get(&self, format: FileFormat) -> Option<&dyn Datatype> {
        self.iter().find(|datatype| datatype.format() == format)
    }

    #[must_use]
    pub fn by_extension(&self, ext: &str) -> Option<&dyn Datatype> {
        FileFormat::from_extension(ext).and_then(|format| self.get(format))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&SniffConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_exact() {
        assert_eq!(FileFormat::DotBracket.extension(), "dbn");
        assert_eq!(FileFormat::DotBracket.edam_format(), "format_1457");
        assert_eq!(FileFormat::ConnectivityTable.extension(), "ct");
        assert_eq!(FileFormat::ConnectivityTable.edam_format(), "format_3309");
        assert_eq!(FileFormat::Rnaml.extension(), "rnaml");
        assert_eq!(FileFormat::Rnaml.edam_format(), "format_3311");
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(FileFormat::from_extension("dbn"), Some(FileFormat::DotBracket));
        assert_eq!(FileFormat::from_extension(".CT"), Some(FileFormat::ConnectivityTable));
        assert_eq!(FileFormat::from_extension("RNAML"), Some(FileFormat::Rnaml));
        assert_eq!(FileFormat::from_extension("fasta"), None);
    }

    #[test]
    fn test_registry_order_and_lookup() {
        let registry = Registry::default();
        let order: Vec<FileFormat> = registry.iter().map(|d| d.format()).collect();
        assert_eq!(order, FileFormat::SNIFF_ORDER.to_vec());

        assert_eq!(
            registry.by_extension("ct").map(|d| d.format()),
            Some(FileFormat::ConnectivityTable)
        );
        assert!(registry.by_extension("sam").is_none());
    }

    #[test]
    fn test_only_ct_declares_columns() {
        let registry = Registry::default();
        for datatype in registry.iter() {
            assert_eq!(
                datatype.columns().is_some(),
                datatype.format() == FileFormat::ConnectivityTable
            );
        }
    }
}
