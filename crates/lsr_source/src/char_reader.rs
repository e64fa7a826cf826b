//! Character-level reader with a synthetic end-of-line character.
//!
//! Each logical line is exposed as its content bytes at columns `1..=N`,
//! followed by one terminator character at column `N + 1` that always reads
//! as `b'\n'`. CR, LF and CRLF therefore look identical to a consumer. A
//! final line cut off by EOF gets the same terminator character.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{LineChar, LineSplitter, SourceError};

/// Reads one [`LineChar`] at a time.
///
/// [`get`](Self::get) peeks without consuming and is idempotent;
/// [`adv`](Self::adv) consumes one character.
pub struct LineCharReader<R> {
    filename: Arc<str>,
    splitter: LineSplitter<R>,
    /// Text of the line currently being traversed.
    current: Option<Arc<[u8]>>,
    /// Offset into the current line; `current.len()` is the terminator.
    offset: usize,
    line: u32,
}

impl LineCharReader<File> {
    /// Open `path` for reading. The filename reported in positions is the
    /// path as given.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SourceError::open(path, e))?;
        debug!(path = %path.display(), "opened character source");
        Ok(LineCharReader::new(path.display().to_string(), file))
    }
}

impl<R: Read> LineCharReader<R> {
    pub fn new(filename: impl Into<Arc<str>>, source: R) -> Self {
        LineCharReader {
            filename: filename.into(),
            splitter: LineSplitter::new(source),
            current: None,
            offset: 0,
            line: 0,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The character at the current position, or `None` at end of input.
    ///
    /// Calling `get` repeatedly without [`adv`](Self::adv) returns equal
    /// values.
    pub fn get(&mut self) -> Option<LineChar> {
        if !self.fill() {
            return None;
        }
        let text = self.current.as_ref()?;
        Some(LineChar::new(
            Arc::clone(&self.filename),
            self.line,
            Arc::clone(text),
            self.offset,
        ))
    }

    /// Consume the current character. No-op at end of input.
    pub fn adv(&mut self) {
        if self.fill() {
            self.offset += 1;
        }
    }

    /// Raw bytes consumed from the source so far. Counts whole lines: the
    /// line currently being traversed is included in full.
    pub fn bytes_consumed(&self) -> u64 {
        self.splitter.bytes_consumed()
    }

    /// Release the byte source before the reader goes out of scope.
    pub fn close(self) {
        debug!(filename = %self.filename, lines = self.line, "closing character source");
    }

    /// Stop reading and hand back the byte source.
    pub fn into_inner(self) -> R {
        self.splitter.into_inner()
    }

    /// Make sure `offset` names a readable character, pulling further lines
    /// as needed. Returns `false` at end of input.
    fn fill(&mut self) -> bool {
        loop {
            if self
                .current
                .as_ref()
                .is_some_and(|text| self.offset <= text.len())
            {
                return true;
            }
            let Some(split) = self.splitter.next_line() else {
                self.current = None;
                return false;
            };
            self.line = self.line.saturating_add(1);
            self.offset = 0;
            self.current = Some(split.text.into());
        }
    }
}

impl<R: Read> Iterator for LineCharReader<R> {
    type Item = LineChar;

    fn next(&mut self) -> Option<LineChar> {
        let c = self.get()?;
        self.adv();
        Some(c)
    }
}
