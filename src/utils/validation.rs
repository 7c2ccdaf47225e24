//! Scan limits and the helpers that enforce them.

/// Lines inspected by the Dot-Bracket sniffer (one header/sequence/structure record)
pub const DBN_SNIFF_LINES: usize = 3;

/// Default bound on lines inspected by the Connectivity Table sniffer
pub const DEFAULT_CT_MAX_LINES: usize = 100_000;

/// Default cap on the bytes buffered for a single line.
///
/// Input without newlines (compressed or binary data) would otherwise be read
/// whole into memory as one line.
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// Default number of bytes read when looking for the XML prolog and root element
pub const DEFAULT_XML_PREFIX_BYTES: usize = 4096;

/// Whether a file is too large for optional metadata to be computed.
///
/// `limit` of `None` means metadata is always computed. The comparison is
/// strict: a file exactly at the limit is still scanned.
///
/// # Examples
///
/// ```
/// use rna_sniff::utils::validation::exceeds_metadata_limit;
///
/// assert!(!exceeds_metadata_limit(1_000_000, None));
/// assert!(exceeds_metadata_limit(10, Some(0)));
/// assert!(!exceeds_metadata_limit(10, Some(10)));
/// ```
#[must_use]
pub fn exceeds_metadata_limit(size: u64, limit: Option<u64>) -> bool {
    limit.is_some_and(|max| size > max)
}

/// Check whether the line at `index` falls outside the scan bound.
///
/// Call this with the index of the line about to be classified.
/// Returns a message if the bound has been reached, None if the line may be scanned.
#[must_use]
pub fn check_line_limit(index: usize, max_lines: Option<usize>) -> Option<String> {
    match max_lines {
        Some(max) if index >= max => Some(format!(
            "Scan bound reached: stopped after {max} lines"
        )),
        _ => None,
    }
}
