//! Positional line classifiers.
//!
//! Each function decides whether a single, already stripped line satisfies the
//! grammar of its role. They hold no state; sniffers drive them line by line.

use crate::parsing::patterns::PatternLibrary;

/// Role of a line in a Dot-Bracket file, cycling with period 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbnRole {
    Header,
    Sequence,
    Structure,
}

impl DbnRole {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => DbnRole::Header,
            1 => DbnRole::Sequence,
            _ => DbnRole::Structure,
        }
    }
}

/// Role of a line in a Connectivity Table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtRole {
    Header,
    DataRow,
}

impl CtRole {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            CtRole::Header
        } else {
            CtRole::DataRow
        }
    }
}

/// Dot-Bracket header: starts with `>`
#[must_use]
pub fn is_dbn_header(line: &str) -> bool {
    line.starts_with('>')
}

/// Dot-Bracket sequence line.
///
/// Returns the sequence length when the line is a valid nucleotide run.
#[must_use]
pub fn dbn_sequence_len(patterns: &PatternLibrary, line: &str) -> Option<usize> {
    patterns
        .is_sequence_char_run(line)
        .then(|| line.chars().count())
}

/// Dot-Bracket structure line: same length as its sequence, only structure
/// characters, round and square brackets each balanced.
#[must_use]
pub fn is_dbn_structure(patterns: &PatternLibrary, line: &str, expected_len: usize) -> bool {
    line.chars().count() == expected_len
        && patterns.is_dotbracket_run(line)
        && brackets_balanced(line)
}

fn brackets_balanced(line: &str) -> bool {
    let count = |c: char| line.chars().filter(|&x| x == c).count();
    count('(') == count(')') && count('[') == count(']')
}

/// Connectivity Table line for the given role.
///
/// The line is upper-cased before matching, so `energy`, `ENERGY` and `dG`
/// headers and lowercase bases are all recognised.
#[must_use]
pub fn is_ct_line(patterns: &PatternLibrary, role: CtRole, line: &str) -> bool {
    let upper = line.to_uppercase();
    match role {
        CtRole::Header => patterns.is_ct_header_line(&upper),
        CtRole::DataRow => patterns.is_ct_data_line(&upper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> &'static PatternLibrary {
        PatternLibrary::shared()
    }

    #[test]
    fn test_dbn_roles_cycle() {
        let roles: Vec<DbnRole> = (0..6).map(DbnRole::for_index).collect();
        assert_eq!(
            roles,
            vec![
                DbnRole::Header,
                DbnRole::Sequence,
                DbnRole::Structure,
                DbnRole::Header,
                DbnRole::Sequence,
                DbnRole::Structure,
            ]
        );
    }

    #[test]
    fn test_ct_roles() {
        assert_eq!(CtRole::for_index(0), CtRole::Header);
        assert_eq!(CtRole::for_index(1), CtRole::DataRow);
        assert_eq!(CtRole::for_index(1000), CtRole::DataRow);
    }

    #[test]
    fn test_dbn_header() {
        assert!(is_dbn_header(">seq1"));
        assert!(is_dbn_header(">"));
        assert!(!is_dbn_header("seq1"));
        assert!(!is_dbn_header(""));
    }

    #[test]
    fn test_dbn_sequence_len() {
        assert_eq!(dbn_sequence_len(patterns(), "CCCaaaGGG"), Some(9));
        assert_eq!(dbn_sequence_len(patterns(), "CCC aaa"), None);
        assert_eq!(dbn_sequence_len(patterns(), ""), None);
    }

    #[test]
    fn test_dbn_structure() {
        assert!(is_dbn_structure(patterns(), "(((...)))", 9));
        assert!(is_dbn_structure(patterns(), "[[(..)]]", 8));
        assert!(is_dbn_structure(patterns(), "", 0));
        // length mismatch
        assert!(!is_dbn_structure(patterns(), "(((....)))", 9));
        // unbalanced round brackets
        assert!(!is_dbn_structure(patterns(), "((....)))", 9));
        // round and square are balanced independently
        assert!(!is_dbn_structure(patterns(), "((..]]...", 9));
        assert!(!is_dbn_structure(patterns(), "(((xxx)))", 9));
    }

    #[test]
    fn test_ct_line_is_case_insensitive() {
        assert!(is_ct_line(patterns(), CtRole::Header, "5\tenergy = -12.3\tname"));
        assert!(is_ct_line(patterns(), CtRole::Header, "5\tdG = -12.3\tname"));
        assert!(is_ct_line(patterns(), CtRole::DataRow, "4\ta\t3\t5\t0\t4"));
        assert!(!is_ct_line(patterns(), CtRole::DataRow, "5\tenergy = -12.3\tname"));
        assert!(!is_ct_line(patterns(), CtRole::Header, "1\tG\t0\t2\t0\t1"));
    }
}
