//! Compiled line patterns for RNA secondary structure formats.
//!
//! The patterns are built once per process and shared by reference through
//! [`PatternLibrary::shared`].

use regex_automata::meta::Regex;
use std::sync::OnceLock;

/// IUPAC nucleotide codes, either case
const NUCLEOTIDES: &str = "ACGTURYKMSWBDHVNacgturykmswbdhvn";

/// Tab, or a run of spaces
const SEPARATOR: &str = r"(?:\t| +)";

/// Holds the compiled patterns used by the line classifiers
#[derive(Debug)]
pub struct PatternLibrary {
    sequence: Regex,
    dotbracket: Regex,
    ct_header: Regex,
    ct_data: Regex,
}

impl PatternLibrary {
    /// The process-wide pattern library
    #[must_use]
    pub fn shared() -> &'static PatternLibrary {
        static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();
        LIBRARY.get_or_init(|| Self::build().expect("built-in line patterns are valid"))
    }

    fn build() -> Result<Self, regex_automata::meta::BuildError> {
        let sequence = Regex::new(&format!("^[{NUCLEOTIDES}]+$"))?;
        let dotbracket = Regex::new(r"^[().\[\]]*$")?;

        // Index, separator, anything, then an ENERGY or dG token
        let ct_header = Regex::new(&format!(
            r"(?i)^[0-9]+{SEPARATOR}.*?(?-u:\b)(?:ENERGY|DG)(?-u:\b)"
        ))?;

        // base_index, base, then four fields that may hold any non-tab text.
        // The end is left open: trailing columns are tolerated.
        let loose = "[^\t]+";
        let ct_data = Regex::new(&format!(
            "^[0-9]+{SEPARATOR}[{NUCLEOTIDES}]+{SEPARATOR}{loose}{SEPARATOR}{loose}{SEPARATOR}{loose}{SEPARATOR}{loose}"
        ))?;

        Ok(Self {
            sequence,
            dotbracket,
            ct_header,
            ct_data,
        })
    }

    /// Non-empty run of IUPAC nucleotide codes, case-insensitive
    #[must_use]
    pub fn is_sequence_char_run(&self, s: &str) -> bool {
        self.sequence.is_match(s)
    }

    /// Only `(`, `)`, `.`, `[` and `]`; may be empty, balance is not checked
    #[must_use]
    pub fn is_dotbracket_run(&self, s: &str) -> bool {
        self.dotbracket.is_match(s)
    }

    /// Base count, separator, then an `ENERGY` or `dG` token somewhere later
    #[must_use]
    pub fn is_ct_header_line(&self, s: &str) -> bool {
        self.ct_header.is_match(s)
    }

    /// Six separated fields: index, nucleotide run, four loose fields
    #[must_use]
    pub fn is_ct_data_line(&self, s: &str) -> bool {
        self.ct_data.is_match(s)
    }
}

/// See [`PatternLibrary::is_sequence_char_run`]
#[must_use]
pub fn is_sequence_char_run(s: &str) -> bool {
    PatternLibrary::shared().is_sequence_char_run(s)
}

/// See [`PatternLibrary::is_dotbracket_run`]
#[must_use]
pub fn is_dotbracket_run(s: &str) -> bool {
    PatternLibrary::shared().is_dotbracket_run(s)
}

/// See [`PatternLibrary::is_ct_header_line`]
#[must_use]
pub fn is_ct_header_line(s: &str) -> bool {
    PatternLibrary::shared().is_ct_header_line(s)
}

/// See [`PatternLibrary::is_ct_data_line`]
#[must_use]
pub fn is_ct_data_line(s: &str) -> bool {
    PatternLibrary::shared().is_ct_data_line(s)
}
