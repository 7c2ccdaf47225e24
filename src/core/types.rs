use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of sniffing a source against one datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The source satisfied every line grammar that was inspected
    Accepted,
    /// A line failed its role grammar
    Rejected,
    /// The input ended before a decisive line was reached
    Unknown,
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Collapse `Unknown` into `Rejected`, which is what sniffing callers observe.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Verdict::Unknown => Verdict::Rejected,
            other => other,
        }
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Metadata fields a datatype can populate in host storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    DataLines,
    Sequences,
}

impl MetadataField {
    /// Field name as stored by the host
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetadataField::DataLines => "data_lines",
            MetadataField::Sequences => "sequences",
        }
    }
}

/// Caller-owned metadata storage.
///
/// A `None` value means the field is explicitly unset, e.g. because the file
/// was larger than the optional metadata size limit.
pub trait MetadataStore {
    fn set(&mut self, field: MetadataField, value: Option<u64>);
}

impl MetadataStore for BTreeMap<String, Option<u64>> {
    fn set(&mut self, field: MetadataField, value: Option<u64>) {
        self.insert(field.name().to_string(), value);
    }
}

/// Summary counts extracted from a whole file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSummary {
    /// Every line read, blank lines included
    #[serde(rename = "data_lines")]
    pub total_line_count: Option<u64>,

    /// Format specific record markers (`>` headers for Dot-Bracket)
    #[serde(rename = "sequences")]
    pub record_count: Option<u64>,
}

impl MetadataSummary {
    /// Summary for a file whose metadata was not computed
    #[must_use]
    pub fn omitted() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: MetadataField) -> Option<u64> {
        match field {
            MetadataField::DataLines => self.total_line_count,
            MetadataField::Sequences => self.record_count,
        }
    }

    /// Write the given fields into a caller-owned store
    pub fn write_to(&self, fields: &[MetadataField], store: &mut dyn MetadataStore) {
        for &field in fields {
            store.set(field, self.get(field));
        }
    }
}

impl MetadataStore for MetadataSummary {
    fn set(&mut self, field: MetadataField, value: Option<u64>) {
        match field {
            MetadataField::DataLines => self.total_line_count = value,
            MetadataField::Sequences => self.record_count = value,
        }
    }
}

/// Declared type of a tabular column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Str,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "str"),
        }
    }
}

/// One named, typed column of a tabular datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    #[must_use]
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_resolve() {
        assert_eq!(Verdict::Unknown.resolve(), Verdict::Rejected);
        assert_eq!(Verdict::Accepted.resolve(), Verdict::Accepted);
        assert_eq!(Verdict::Rejected.resolve(), Verdict::Rejected);
        assert!(Verdict::from(true).is_accepted());
        assert!(!Verdict::Unknown.is_accepted());
    }

    #[test]
    fn test_summary_serializes_host_field_names() {
        let summary = MetadataSummary {
            total_line_count: Some(6),
            record_count: None,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["data_lines"], 6);
        assert!(json["sequences"].is_null());
    }

    #[test]
    fn test_write_to_map_store() {
        let summary = MetadataSummary {
            total_line_count: Some(6),
            record_count: Some(2),
        };
        let mut store: BTreeMap<String, Option<u64>> = BTreeMap::new();
        summary.write_to(&[MetadataField::DataLines], &mut store);

        assert_eq!(store.get("data_lines"), Some(&Some(6)));
        assert!(!store.contains_key("sequences"));
    }

    #[test]
    fn test_omitted_clears_every_field() {
        let mut store = MetadataSummary {
            total_line_count: Some(1),
            record_count: Some(1),
        };
        MetadataSummary::omitted().write_to(
            &[MetadataField::DataLines, MetadataField::Sequences],
            &mut store,
        );
        assert_eq!(store, MetadataSummary::omitted());
    }
}
