//! Line-level grammars for RNA secondary structure formats.
//!
//! - [`patterns`]: compiled patterns ([`PatternLibrary`](patterns::PatternLibrary))
//! - [`classify`]: per-role line classifiers built on those patterns
//!
//! ## Example
//!
//! ```rust
//! use rna_sniff::parsing::patterns::{is_ct_data_line, is_sequence_char_run};
//!
//! assert!(is_sequence_char_run("CCCaaaGGG"));
//! assert!(is_ct_data_line("1\tG\t0\t2\t0\t1"));
//! ```
//!
//! ## Grammars
//!
//! | Pattern | Accepts |
//! |---------|---------|
//! | sequence run | `A C G T U R Y K M S W B D H V N`, any case, non-empty |
//! | dot-bracket run | `( ) . [ ]`, possibly empty |
//! | CT header | digits, tab or spaces, ..., `ENERGY` or `dG` token |
//! | CT data row | digits, nucleotide run, four non-tab fields |

pub mod classify;
pub mod patterns;
