//! Dot-Bracket Notation (`.dbn`).
//!
//! ```text
//! >sequenceName1
//! CCCaaaGGG
//! (((...)))
//! >sequenceName2
//! GGGuuuCCC
//! (((...)))
//! ```
//!
//! Whether a file may hold more than one record is not settled, so the sniffer
//! only inspects the first header/sequence/structure triple. Metadata
//! extraction, on the other hand, counts every `>` header in the file.

use tracing::debug;

use crate::core::source::TextSource;
use crate::core::types::{MetadataField, MetadataSummary, Verdict};
use crate::formats::{Datatype, FileFormat, SniffError};
use crate::parsing::classify::{dbn_sequence_len, is_dbn_header, is_dbn_structure, DbnRole};
use crate::parsing::patterns::PatternLibrary;
use crate::utils::validation::{exceeds_metadata_limit, DBN_SNIFF_LINES, MAX_LINE_BYTES};

#[derive(Debug, Clone, Copy)]
pub struct DotBracket {
    max_line_bytes: usize,
}

impl DotBracket {
    /// `max_line_bytes` caps the bytes buffered per line while sniffing.
    #[must_use]
    pub fn new(max_line_bytes: usize) -> Self {
        Self { max_line_bytes }
    }
}

impl Default for DotBracket {
    fn default() -> Self {
        Self::new(MAX_LINE_BYTES)
    }
}

impl Datatype for DotBracket {
    fn format(&self) -> FileFormat {
        FileFormat::DotBracket
    }

    fn probe(&self, source: &dyn TextSource) -> Result<Verdict, SniffError> {
        let patterns = PatternLibrary::shared();
        let mut expected_len = 0;

        let lines = source.lines_capped(self.max_line_bytes)?;
        for (index, line) in lines.take(DBN_SNIFF_LINES).enumerate() {
            let line = line?;
            if line.is_overlong() {
                debug!(index, max = self.max_line_bytes, "dbn: line exceeds byte cap");
                return Ok(Verdict::Rejected);
            }
            let line = line.text().trim();

            match DbnRole::for_index(index) {
                DbnRole::Header => {
                    if !is_dbn_header(line) {
                        debug!(index, "dbn: header line does not start with '>'");
                        return Ok(Verdict::Rejected);
                    }
                }
                DbnRole::Sequence => match dbn_sequence_len(patterns, line) {
                    Some(len) => expected_len = len,
                    None => {
                        debug!(index, "dbn: sequence line is not a nucleotide run");
                        return Ok(Verdict::Rejected);
                    }
                },
                DbnRole::Structure => {
                    let accepted = is_dbn_structure(patterns, line, expected_len);
                    if !accepted {
                        debug!(index, expected_len, "dbn: structure line rejected");
                    }
                    return Ok(Verdict::from(accepted));
                }
            }
        }

        // Fewer than three lines
        Ok(Verdict::Unknown)
    }

    fn extract_metadata(
        &self,
        source: &dyn TextSource,
        limit: Option<u64>,
    ) -> Result<MetadataSummary, SniffError> {
        let size = source.size()?;
        if exceeds_metadata_limit(size, limit) {
            debug!(size, ?limit, "dbn: file exceeds metadata limit, skipping scan");
            return Ok(MetadataSummary::omitted());
        }

        let mut data_lines = 0;
        let mut sequences = 0;
        for line in source.lines_capped(self.max_line_bytes)? {
            let line = line?;
            data_lines += 1;
            if line.text().trim().starts_with('>') {
                sequences += 1;
            }
        }

        Ok(MetadataSummary {
            total_line_count: Some(data_lines),
            record_count: Some(sequences),
        })
    }

    fn metadata_fields(&self) -> &'static [MetadataField] {
        &[MetadataField::DataLines, MetadataField::Sequences]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MemorySource;

    fn probe(lines: &[&str]) -> Verdict {
        DotBracket::default().probe(&MemorySource::from_lines(lines)).unwrap()
    }

    fn sniff(lines: &[&str]) -> Verdict {
        DotBracket::default().sniff(&MemorySource::from_lines(lines)).unwrap()
    }

    #[test]
    fn test_single_record_accepted() {
        assert_eq!(sniff(&[">h1", "CCCaaaGGG", "(((...)))"]), Verdict::Accepted);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(sniff(&[">h1", "CCCaaaGGG", "(((....)))"]), Verdict::Rejected);
    }

    #[test]
    fn test_short_input_is_unknown_then_rejected() {
        assert_eq!(probe(&[">h1", "CCCaaaGGG"]), Verdict::Unknown);
        assert_eq!(sniff(&[">h1", "CCCaaaGGG"]), Verdict::Rejected);
        assert_eq!(probe(&[]), Verdict::Unknown);
    }

    #[test]
    fn test_early_rejection_is_decisive() {
        // a bad header decides even though only one line exists
        assert_eq!(probe(&["h1"]), Verdict::Rejected);
        assert_eq!(probe(&[">h1", "CCCxGGG"]), Verdict::Rejected);
        assert_eq!(probe(&["", "CCCaaaGGG", "(((...)))"]), Verdict::Rejected);
    }

    #[test]
    fn test_unbalanced_structure_rejected() {
        assert_eq!(sniff(&[">h1", "CCCaaaGGG", "((....)))"]), Verdict::Rejected);
        assert_eq!(sniff(&[">h1", "CCCaaaGGG", "[[....)))"]), Verdict::Rejected);
        assert_eq!(sniff(&[">h1", "CCCaaaGGG", "[[(...)]]"]), Verdict::Accepted);
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        assert_eq!(
            sniff(&["  >h1  ", "\tCCCaaaGGG ", "(((...)))\r"]),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_only_first_record_is_sniffed() {
        let lines = [">h1", "CCCaaaGGG", "(((...)))", "garbage", "more garbage"];
        assert_eq!(sniff(&lines), Verdict::Accepted);
    }

    #[test]
    fn test_metadata_counts_every_record() {
        let source = MemorySource::from_lines(&[
            ">h1",
            "CCCaaaGGG",
            "(((...)))",
            ">h2",
            "GGGuuuCCC",
            "(((...)))",
        ]);
        let summary = DotBracket::default().extract_metadata(&source, None).unwrap();
        assert_eq!(summary.total_line_count, Some(6));
        assert_eq!(summary.record_count, Some(2));
    }

    #[test]
    fn test_metadata_counts_blank_lines() {
        let source = MemorySource::new(">h1\nCCC\n(.)\n\n  \n>h2\n");
        let summary = DotBracket::default().extract_metadata(&source, None).unwrap();
        assert_eq!(summary.total_line_count, Some(6));
        assert_eq!(summary.record_count, Some(2));
    }

    #[test]
    fn test_metadata_omitted_over_limit() {
        let source = MemorySource::from_lines(&[">h1", "CCCaaaGGG", "(((...)))"]);
        let summary = DotBracket::default().extract_metadata(&source, Some(0)).unwrap();
        assert_eq!(summary, MetadataSummary::omitted());

        let size = source.size().unwrap();
        let summary = DotBracket::default().extract_metadata(&source, Some(size)).unwrap();
        assert_eq!(summary.total_line_count, Some(3));
    }

    #[test]
    fn test_overlong_line_rejected() {
        let long_sequence = "A".repeat(64);
        let structure = ".".repeat(64);
        let lines = [">h1", long_sequence.as_str(), structure.as_str()];
        let source = MemorySource::from_lines(&lines);

        assert_eq!(DotBracket::new(32).sniff(&source).unwrap(), Verdict::Rejected);
        assert_eq!(DotBracket::new(64).sniff(&source).unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_metadata_counts_overlong_lines_once() {
        let long_name = format!(">{}", "x".repeat(100));
        let source = MemorySource::from_lines(&[long_name.as_str(), "CCC", "(.)", ">h2"]);
        let summary = DotBracket::new(16).extract_metadata(&source, None).unwrap();
        assert_eq!(summary.total_line_count, Some(4));
        assert_eq!(summary.record_count, Some(2));
    }
}
