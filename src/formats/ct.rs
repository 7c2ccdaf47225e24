//! Connectivity Table (`.ct`).
//!
//! A header line with the base count and an energy annotation, then one row
//! per base:
//!
//! ```text
//! 5	energy = -12.3	sequence name
//! 1	G	0	2	0	1
//! 2	A	1	3	0	2
//! 3	A	2	4	0	3
//! 4	A	3	5	0	4
//! 5	C	4	6	1	5
//! ```
//!
//! The separator is not standardised. RNAstructure writes space-aligned
//! columns instead of tabs:
//!
//! ```text
//!    10    ENERGY = -34.8  seqname
//!     1 G       0    2    9    1
//!     2 G       1    3    8    2
//! ```
//!
//! Both layouts are accepted. A file holding only the header line is also
//! accepted: nothing beyond the header is required.

use tracing::{debug, warn};

use crate::core::source::TextSource;
use crate::core::types::{Column, ColumnType, MetadataField, MetadataSummary, Verdict};
use crate::formats::{Datatype, FileFormat, SniffError};
use crate::parsing::classify::{is_ct_line, CtRole};
use crate::parsing::patterns::PatternLibrary;
use crate::utils::validation::{check_line_limit, MAX_LINE_BYTES};

/// Column schema of a Connectivity Table data row
pub const CT_COLUMNS: [Column; 6] = [
    Column::new("base_index", ColumnType::Int),
    Column::new("base", ColumnType::Str),
    Column::new("neighbor_left", ColumnType::Int),
    Column::new("neighbor_right", ColumnType::Int),
    Column::new("partner", ColumnType::Int),
    Column::new("natural_numbering", ColumnType::Int),
];

#[derive(Debug, Clone, Copy)]
pub struct ConnectivityTable {
    max_lines: Option<usize>,
    max_line_bytes: usize,
}

impl ConnectivityTable {
    /// `max_lines` bounds the sniffing scan; `None` reads to end of input.
    #[must_use]
    pub fn new(max_lines: Option<usize>) -> Self {
        Self {
            max_lines,
            max_line_bytes: MAX_LINE_BYTES,
        }
    }

    #[must_use]
    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }
}

impl Default for ConnectivityTable {
    fn default() -> Self {
        Self::new(crate::config::SniffConfig::default().ct_max_lines)
    }
}

impl Datatype for ConnectivityTable {
    fn format(&self) -> FileFormat {
        FileFormat::ConnectivityTable
    }

    fn probe(&self, source: &dyn TextSource) -> Result<Verdict, SniffError> {
        let patterns = PatternLibrary::shared();
        let mut lines_checked = 0usize;

        for (index, line) in source.lines_capped(self.max_line_bytes)?.enumerate() {
            if let Some(message) = check_line_limit(index, self.max_lines) {
                warn!("ct: {message}; accepting the inspected prefix");
                break;
            }

            let line = line?;
            let role = CtRole::for_index(index);
            if line.is_overlong() {
                debug!(index, max = self.max_line_bytes, "ct: line exceeds byte cap");
                return Ok(Verdict::Rejected);
            }
            if !is_ct_line(patterns, role, line.text().trim()) {
                debug!(index, ?role, "ct: line rejected");
                return Ok(Verdict::Rejected);
            }
            lines_checked += 1;
        }

        // Galaxy's ConnectivityTable sniffer accepts an empty file unchecked.
        // Without a header line there is nothing to decide on, so this stays
        // Unknown and sniffs as Rejected.
        if lines_checked == 0 {
            return Ok(Verdict::Unknown);
        }
        Ok(Verdict::Accepted)
    }

    /// Counts every line. The optional metadata limit does not apply to this format.
    fn extract_metadata(
        &self,
        source: &dyn TextSource,
        _limit: Option<u64>,
    ) -> Result<MetadataSummary, SniffError> {
        let mut data_lines = 0;
        for line in source.lines_capped(self.max_line_bytes)? {
            line?;
            data_lines += 1;
        }

        Ok(MetadataSummary {
            total_line_count: Some(data_lines),
            record_count: None,
        })
    }

    fn metadata_fields(&self) -> &'static [MetadataField] {
        &[MetadataField::DataLines]
    }

    fn columns(&self) -> Option<&'static [Column]> {
        Some(&CT_COLUMNS)
    }
}
