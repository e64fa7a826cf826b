//! Positioned values produced by the readers.
//!
//! All types here are self-contained values: the filename and line text are
//! shared `Arc`s, so copying a [`LineChar`] per character is cheap and never
//! borrows from the reader that produced it.
//!
//! Line text is the raw bytes of the input, not decoded. Columns index those
//! bytes directly, whether or not they are valid UTF-8.

use std::fmt;
use std::sync::Arc;

/// A location in a named input.
///
/// `line` is 1-based. `column` is 1-based for character positions and `0`
/// when the position refers to a whole line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub filename: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(filename: Arc<str>, line: u32, column: u32) -> Self {
        Position {
            filename,
            line,
            column,
        }
    }

    /// `(line, column)`, which orders positions within one file.
    #[inline]
    pub fn line_col(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column == 0 {
            write!(f, "{}:{}", self.filename, self.line)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}

/// One logical line, terminator stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    position: Position,
    text: Arc<[u8]>,
}

impl Line {
    pub(crate) fn new(filename: Arc<str>, line: u32, text: Arc<[u8]>) -> Self {
        Line {
            position: Position::new(filename, line, 0),
            text,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn filename(&self) -> &str {
        &self.position.filename
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Always `0`: a line has no column.
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Raw line content.
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

/// What a [`LineChar`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineCharKind {
    /// A byte of line content.
    Content(u8),
    /// The synthetic end-of-line marker, whatever the source terminator was.
    LineEnd,
}

/// A single character position, carrying the full text of its line.
///
/// Offsets `0..text.len()` are content; offset `text.len()` is the
/// synthetic terminator, which reads as `b'\n'`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineChar {
    position: Position,
    text: Arc<[u8]>,
    offset: usize,
}

impl LineChar {
    pub(crate) fn new(filename: Arc<str>, line: u32, text: Arc<[u8]>, offset: usize) -> Self {
        debug_assert!(offset <= text.len(), "offset past synthetic terminator");
        // Columns beyond u32 would need a >4 GiB line.
        let column = u32::try_from(offset + 1).unwrap_or(u32::MAX);
        LineChar {
            position: Position::new(filename, line, column),
            text,
            offset,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn filename(&self) -> &str {
        &self.position.filename
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based byte column.
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Full raw text of the line this character belongs to.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn kind(&self) -> LineCharKind {
        match self.text.get(self.offset) {
            Some(&byte) => LineCharKind::Content(byte),
            None => LineCharKind::LineEnd,
        }
    }

    /// The character byte; the synthetic terminator reads as `b'\n'`.
    pub fn ch(&self) -> u8 {
        match self.kind() {
            LineCharKind::Content(byte) => byte,
            LineCharKind::LineEnd => b'\n',
        }
    }

    pub fn is_line_end(&self) -> bool {
        self.offset == self.text.len()
    }
}
