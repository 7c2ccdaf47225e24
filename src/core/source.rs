//! Readable inputs handed to sniffers and metadata extractors.
//!
//! Every call to [`TextSource::lines`] opens a fresh reader, so a source can be
//! sniffed by several datatypes in turn without any reset logic.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::utils::validation::MAX_LINE_BYTES;

/// A re-openable text input
pub trait TextSource {
    /// Open a new buffered reader positioned at the start of the input
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the input cannot be opened.
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;

    /// Size of the input in bytes
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the size cannot be determined.
    fn size(&self) -> io::Result<u64>;

    /// Name used for extension-based hints and log messages
    fn name(&self) -> Option<&str> {
        None
    }

    /// Iterate over the lines of a freshly opened reader, capped at [`MAX_LINE_BYTES`]
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the input cannot be opened.
    fn lines(&self) -> io::Result<RawLines<Box<dyn BufRead + '_>>> {
        self.lines_capped(MAX_LINE_BYTES)
    }

    /// Iterate over the lines of a freshly opened reader, buffering at most
    /// `max_line_bytes` of any one line
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the input cannot be opened.
    fn lines_capped(&self, max_line_bytes: usize) -> io::Result<RawLines<Box<dyn BufRead + '_>>> {
        Ok(RawLines::new(self.open()?, max_line_bytes))
    }
}

/// A file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn size(&self) -> io::Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Text held in memory (stdin, tests)
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: Option<String>,
    content: Vec<u8>,
}

impl MemorySource {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: None,
            content: content.into(),
        }
    }

    /// Build a source from lines joined with `\n`, with a trailing newline
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self::new(text)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl TextSource for MemorySource {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.content.as_slice())))
    }

    fn size(&self) -> io::Result<u64> {
        Ok(self.content.len() as u64)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// One line of input without its terminating newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    overlong: bool,
}

impl Line {
    /// The line content; for an overlong line only the buffered prefix
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the line was longer than the byte cap. No line grammar accepts it.
    #[must_use]
    pub fn is_overlong(&self) -> bool {
        self.overlong
    }
}

/// Lines split on `\n` and decoded lossily.
///
/// Invalid UTF-8 becomes U+FFFD, which no line grammar accepts, so binary
/// input is rejected instead of surfacing as a read error. A final line
/// without a terminating newline is still yielded.
///
/// At most `max_line_bytes` of a line are buffered. A longer line is yielded
/// once, marked overlong, and the rest of it is skipped on the following call,
/// so a caller that stops at an overlong line never reads past the cap.
pub struct RawLines<R> {
    reader: R,
    buf: Vec<u8>,
    max_line_bytes: usize,
    skip_pending: bool,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R, max_line_bytes: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            max_line_bytes,
            skip_pending: false,
        }
    }

    /// Consume input up to and including the next `\n`, without buffering it
    fn skip_line(&mut self) -> io::Result<()> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skip_pending {
            self.skip_pending = false;
            if let Err(e) = self.skip_line() {
                return Some(Err(e));
            }
        }

        self.buf.clear();
        // one extra byte leaves room for the newline of a line exactly at the cap
        let limit = (self.max_line_bytes as u64).saturating_add(1);
        match (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut overlong = false;
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                } else if self.buf.len() as u64 == limit {
                    self.buf.truncate(self.max_line_bytes);
                    self.skip_pending = true;
                    overlong = true;
                }
                Some(Ok(Line {
                    text: String::from_utf8_lossy(&self.buf).into_owned(),
                    overlong,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
