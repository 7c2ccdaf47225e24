//! RNAML (`.rnaml`), an XML dialect.
//!
//! Recognition is delegated to an [`XmlInspector`]; no RNAML-specific
//! grammar is checked beyond the root element name. No metadata is computed.

use crate::core::source::TextSource;
use crate::core::types::{MetadataField, MetadataSummary, Verdict};
use crate::formats::xml::{read_prefix, PrologInspector, XmlInspector};
use crate::formats::{Datatype, FileFormat, SniffError};
use crate::utils::validation::DEFAULT_XML_PREFIX_BYTES;

/// Expected document element
pub const RNAML_ROOT: &str = "rnaml";

pub struct Rnaml {
    inspector: Box<dyn XmlInspector>,
    prefix_bytes: usize,
}

impl Rnaml {
    #[must_use]
    pub fn new(prefix_bytes: usize) -> Self {
        Self::with_inspector(Box::new(PrologInspector), prefix_bytes)
    }

    /// Use a host-supplied XML check instead of the built-in prolog inspector
    #[must_use]
    pub fn with_inspector(inspector: Box<dyn XmlInspector>, prefix_bytes: usize) -> Self {
        Self {
            inspector,
            prefix_bytes,
        }
    }
}

impl Default for Rnaml {
    fn default() -> Self {
        Self::new(DEFAULT_XML_PREFIX_BYTES)
    }
}

impl Datatype for Rnaml {
    fn format(&self) -> FileFormat {
        FileFormat::Rnaml
    }

    fn probe(&self, source: &dyn TextSource) -> Result<Verdict, SniffError> {
        let prefix = read_prefix(source, self.prefix_bytes)?;
        Ok(self.inspector.inspect(&prefix, RNAML_ROOT))
    }

    fn extract_metadata(
        &self,
        _source: &dyn TextSource,
        _limit: Option<u64>,
    ) -> Result<MetadataSummary, SniffError> {
        Ok(MetadataSummary::omitted())
    }

    fn metadata_fields(&self) -> &'static [MetadataField] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MemorySource;

    const DOC: &str = r#"<?xml version="1.0"?>
<rnaml version="1.1">
  <molecule id="1">
    <sequence><seq-data>GGGAAACCC</seq-data></sequence>
  </molecule>
</rnaml>
"#;

    #[test]
    fn test_rnaml_document_accepted() {
        let source = MemorySource::new(DOC);
        assert_eq!(Rnaml::default().sniff(&source).unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_prefix_too_small_is_unknown() {
        let source = MemorySource::new(DOC);
        let rnaml = Rnaml::new(10);
        assert_eq!(rnaml.probe(&source).unwrap(), Verdict::Unknown);
        assert_eq!(rnaml.sniff(&source).unwrap(), Verdict::Rejected);
    }

    #[test]
    fn test_custom_inspector() {
        struct AlwaysXml;
        impl XmlInspector for AlwaysXml {
            fn inspect(&self, _prefix: &str, root: &str) -> Verdict {
                Verdict::from(root == RNAML_ROOT)
            }
        }

        let rnaml = Rnaml::with_inspector(Box::new(AlwaysXml), 16);
        let source = MemorySource::new("not xml at all");
        assert!(rnaml.sniff(&source).unwrap().is_accepted());
    }

    #[test]
    fn test_metadata_is_null() {
        let source = MemorySource::new(DOC);
        let summary = Rnaml::default().extract_metadata(&source, None).unwrap();
        assert_eq!(summary, MetadataSummary::omitted());
    }
}
