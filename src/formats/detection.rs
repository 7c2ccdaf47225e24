use std::path::Path;

use tracing::debug;

use crate::core::source::TextSource;
use crate::formats::{Datatype, FileFormat, Registry, SniffError};

/// Errors that can occur during format detection
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Unable to detect file format from content and filename")]
    UnknownFormat,
    #[error(transparent)]
    Sniff(#[from] SniffError),
}

/// Detect file format from content and optional filename
///
/// The extension is only a hint: it is trusted when that datatype's sniffer
/// also accepts the content. Otherwise every datatype is tried in registry order.
///
/// # Errors
///
/// Returns `FormatError::UnknownFormat` if no datatype accepts the content, or
/// `FormatError::Sniff` if the source cannot be read.
pub fn detect_format(
    registry: &Registry,
    source: &dyn TextSource,
    filename: Option<&str>,
) -> Result<FileFormat, FormatError> {
    let filename = filename.or_else(|| source.name());

    // First try filename-based detection if available
    if let Some(format) = filename.and_then(detect_format_from_filename) {
        if let Some(datatype) = registry.get(format) {
            if datatype.sniff(source)?.is_accepted() {
                return Ok(format);
            }
            debug!(%format, "content does not match the format implied by the extension");
        }
    }

    // Fall back to content-based detection
    detect_format_from_content(registry, source)
}

/// Detect format based on filename extension
pub fn detect_format_from_filename(filename: &str) -> Option<FileFormat> {
    let extension = Path::new(filename).extension()?.to_str()?;
    FileFormat::from_extension(extension)
}

/// Run every sniffer in registry order and return the first that accepts
///
/// # Errors
///
/// Returns `FormatError::UnknownFormat` if no datatype accepts the content, or
/// `FormatError::Sniff` if the source cannot be read.
pub fn detect_format_from_content(
    registry: &Registry,
    source: &dyn TextSource,
) -> Result<FileFormat, FormatError> {
    for datatype in registry.iter() {
        if datatype.sniff(source)?.is_accepted() {
            return Ok(datatype.format());
        }
    }
    Err(FormatError::UnknownFormat)
}
