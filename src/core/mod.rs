//! Core types shared by every datatype.
//!
//! - [`Verdict`]: tri-state sniffing outcome
//! - [`MetadataSummary`], [`MetadataStore`], [`MetadataField`]: metadata counts and
//!   the caller-owned storage they are written into
//! - [`Column`], [`ColumnType`]: tabular schema declarations
//! - [`TextSource`]: re-openable line input ([`FileSource`], [`MemorySource`])
//!
//! [`Verdict`]: types::Verdict
//! [`MetadataSummary`]: types::MetadataSummary
//! [`MetadataStore`]: types::MetadataStore
//! [`MetadataField`]: types::MetadataField
//! [`Column`]: types::Column
//! [`ColumnType`]: types::ColumnType
//! [`TextSource`]: source::TextSource
//! [`FileSource`]: source::FileSource
//! [`MemorySource`]: source::MemorySource

pub mod source;
pub mod types;
