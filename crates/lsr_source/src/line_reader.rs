//! Whole-line reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{Line, LineSplitter, SourceError, Terminator};

/// Reads one logical [`Line`] at a time.
///
/// Lines are numbered from 1, once per emitted line, empty lines included.
/// The reader owns its byte source; dropping the reader (or calling
/// [`close`](Self::close)) releases it.
pub struct LineReader<R> {
    filename: Arc<str>,
    splitter: LineSplitter<R>,
    line: u32,
}

impl LineReader<File> {
    /// Open `path` for reading. The filename reported in positions is the
    /// path as given.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SourceError::open(path, e))?;
        debug!(path = %path.display(), "opened line source");
        Ok(LineReader::new(path.display().to_string(), file))
    }
}

impl<R: Read> LineReader<R> {
    pub fn new(filename: impl Into<Arc<str>>, source: R) -> Self {
        LineReader {
            filename: filename.into(),
            splitter: LineSplitter::new(source),
            line: 0,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Read the next line, or `None` once the input is exhausted.
    pub fn read_line(&mut self) -> Option<Line> {
        self.read_line_with_terminator().map(|(line, _)| line)
    }

    /// Like [`read_line`](Self::read_line), also reporting how the line ended.
    pub fn read_line_with_terminator(&mut self) -> Option<(Line, Terminator)> {
        let split = self.splitter.next_line()?;
        self.line = self.line.saturating_add(1);
        let line = Line::new(Arc::clone(&self.filename), self.line, split.text.into());
        Some((line, split.terminator))
    }

    /// Raw bytes consumed from the source so far, terminators included.
    pub fn bytes_consumed(&self) -> u64 {
        self.splitter.bytes_consumed()
    }

    /// Release the byte source before the reader goes out of scope.
    pub fn close(self) {
        debug!(filename = %self.filename, lines = self.line, "closing line source");
    }

    /// Stop reading and hand back the byte source.
    pub fn into_inner(self) -> R {
        self.splitter.into_inner()
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        self.read_line()
    }
}

#[cfg(test)]
mod tests;
