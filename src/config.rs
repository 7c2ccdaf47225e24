//! Sniffing configuration.
//!
//! Defaults come from [`crate::utils::validation`]; a JSON file may override
//! any subset of the fields, and CLI flags override the file.
//!
//! ```json
//! {
//!   "max_optional_metadata_filesize": 1048576,
//!   "ct_max_lines": 5000,
//!   "max_line_bytes": 1048576
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::utils::validation::{DEFAULT_CT_MAX_LINES, DEFAULT_XML_PREFIX_BYTES, MAX_LINE_BYTES};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    /// Files larger than this many bytes get no optional metadata; None scans everything
    pub max_optional_metadata_filesize: Option<u64>,

    /// Bound on lines inspected by the Connectivity Table sniffer; None scans to EOF
    pub ct_max_lines: Option<usize>,

    /// Bytes read when inspecting an XML prolog
    pub xml_prefix_bytes: usize,

    /// Bytes buffered for one line; longer lines fail every line grammar
    pub max_line_bytes: usize,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            max_optional_metadata_filesize: None,
            ct_max_lines: Some(DEFAULT_CT_MAX_LINES),
            xml_prefix_bytes: DEFAULT_XML_PREFIX_BYTES,
            max_line_bytes: MAX_LINE_BYTES,
        }
    }
}

impl SniffConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, or
    /// `ConfigError::ParseError` if it is not valid JSON for this struct.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the text is not valid JSON for this struct.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SniffConfig::from_json(r#"{"max_optional_metadata_filesize": 0}"#).unwrap();
        assert_eq!(config.max_optional_metadata_filesize, Some(0));
        assert_eq!(config.ct_max_lines, Some(DEFAULT_CT_MAX_LINES));
        assert_eq!(config.xml_prefix_bytes, DEFAULT_XML_PREFIX_BYTES);
        assert_eq!(config.max_line_bytes, MAX_LINE_BYTES);
    }

    #[test]
    fn test_line_cap_override() {
        let config = SniffConfig::from_json(r#"{"max_line_bytes": 1024}"#).unwrap();
        assert_eq!(config.max_line_bytes, 1024);
    }

    #[test]
    fn test_unbounded_ct_scan() {
        let config = SniffConfig::from_json(r#"{"ct_max_lines": null}"#).unwrap();
        assert_eq!(config.ct_max_lines, None);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SniffConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            SniffConfig::load_from_file(Path::new("/nonexistent/config.json")),
            Err(ConfigError::ReadError(_))
        ));
    }
}
