//! Generic XML recognition used by XML-based datatypes.
//!
//! Only the prefix of the document is inspected: it must open with an XML
//! declaration, and the first element after any comments, processing
//! instructions or DOCTYPE must carry the expected root name.

use std::io::Read;

use crate::core::source::TextSource;
use crate::core::types::Verdict;
use crate::formats::SniffError;

/// Decides whether a document prefix is XML with a given root element
pub trait XmlInspector: Send + Sync {
    fn inspect(&self, prefix: &str, root: &str) -> Verdict;
}

/// Prolog and root element check over a bounded prefix
#[derive(Debug, Clone, Copy, Default)]
pub struct PrologInspector;

impl XmlInspector for PrologInspector {
    fn inspect(&self, prefix: &str, root: &str) -> Verdict {
        if prefix.is_empty() {
            return Verdict::Unknown;
        }
        if !prefix.starts_with("<?xml ") {
            // Too short to tell whether a declaration was coming
            return if "<?xml ".starts_with(prefix) {
                Verdict::Unknown
            } else {
                Verdict::Rejected
            };
        }

        let mut rest = prefix;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return Verdict::Unknown;
            }

            let skip_to = if rest.starts_with("<?") {
                "?>"
            } else if rest.starts_with("<!--") {
                "-->"
            } else if rest.starts_with("<!DOCTYPE") {
                doctype_terminator(rest)
            } else if rest.starts_with('<') {
                return match element_name(&rest[1..]) {
                    Some(name) => Verdict::from(local_name(name) == root),
                    None => Verdict::Unknown,
                };
            } else {
                // Character data before the root element
                return Verdict::Rejected;
            };

            match rest.find(skip_to) {
                Some(end) => rest = &rest[end + skip_to.len()..],
                None => return Verdict::Unknown,
            }
        }
    }
}

/// A DOCTYPE with an internal subset ends at `]>`, otherwise at `>`
fn doctype_terminator(doctype: &str) -> &'static str {
    match (doctype.find('['), doctype.find('>')) {
        (Some(open), Some(close)) if open < close => "]>",
        (Some(_), None) => "]>",
        _ => ">",
    }
}

/// Element name, or None if the prefix ends before the name does
fn element_name(tag: &str) -> Option<&str> {
    let end = tag.find(|c: char| c.is_whitespace() || c == '/' || c == '>')?;
    (end > 0).then(|| &tag[..end])
}

fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// Read at most `max_bytes` from the start of a source, lossily decoded
///
/// # Errors
///
/// Returns `SniffError::Io` if the source cannot be read.
pub fn read_prefix(source: &dyn TextSource, max_bytes: usize) -> Result<String, SniffError> {
    let mut buf = Vec::with_capacity(max_bytes.min(64 * 1024));
    source
        .open()?
        .take(max_bytes as u64)
        .read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(prefix: &str) -> Verdict {
        PrologInspector.inspect(prefix, "rnaml")
    }

    #[test]
    fn test_declaration_and_root() {
        assert_eq!(
            inspect("<?xml version=\"1.0\"?>\n<rnaml version=\"1.1\">"),
            Verdict::Accepted
        );
        assert_eq!(inspect("<?xml version=\"1.0\"?><rnaml>"), Verdict::Accepted);
    }

    #[test]
    fn test_skips_comments_and_doctype() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<?xml-stylesheet href="style.xsl"?>
<!DOCTYPE rnaml SYSTEM "rnaml.dtd" [ <!ENTITY x "y"> ]>
<rnaml version="1.1">"#;
        assert_eq!(inspect(doc), Verdict::Accepted);
    }

    #[test]
    fn test_namespaced_root() {
        assert_eq!(inspect("<?xml version=\"1.0\"?><r:rnaml xmlns:r=\"x\">"), Verdict::Accepted);
    }

    #[test]
    fn test_other_root_rejected() {
        assert_eq!(inspect("<?xml version=\"1.0\"?><mzML>"), Verdict::Rejected);
    }

    #[test]
    fn test_missing_declaration_rejected() {
        assert_eq!(inspect("<rnaml>"), Verdict::Rejected);
        assert_eq!(inspect(">h1\nCCC\n(.)"), Verdict::Rejected);
    }

    #[test]
    fn test_truncated_prefix_is_unknown() {
        assert_eq!(inspect(""), Verdict::Unknown);
        assert_eq!(inspect("<?xm"), Verdict::Unknown);
        assert_eq!(inspect("<?xml version=\"1.0\"?>\n<!-- a long comment"), Verdict::Unknown);
        assert_eq!(inspect("<?xml version=\"1.0\"?>\n<rnam"), Verdict::Unknown);
    }

    #[test]
    fn test_text_before_root_rejected() {
        assert_eq!(inspect("<?xml version=\"1.0\"?>\nhello <rnaml>"), Verdict::Rejected);
    }
}
