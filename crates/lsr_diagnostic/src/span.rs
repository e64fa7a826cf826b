//! Ordered character spans.

use std::fmt;

use lsr_source::LineChar;

/// Why a pair of characters cannot form a [`LineSpan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanError {
    /// `end` comes before `begin` in document order.
    Reversed {
        begin: (u32, u32),
        end: (u32, u32),
    },
    /// `begin` and `end` were read from different inputs.
    FileMismatch { begin: String, end: String },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Reversed { begin, end } => write!(
                f,
                "span end {}:{} precedes span begin {}:{}",
                end.0, end.1, begin.0, begin.1
            ),
            SpanError::FileMismatch { begin, end } => {
                write!(f, "span begins in '{begin}' but ends in '{end}'")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// An inclusive range of characters, `begin` no later than `end`.
///
/// Only constructible through [`LineSpan::new`] (or [`LineSpan::at`]), so
/// every span that reaches the renderer is well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSpan {
    begin: LineChar,
    end: LineChar,
}

impl LineSpan {
    pub fn new(begin: LineChar, end: LineChar) -> Result<Self, SpanError> {
        if begin.filename() != end.filename() {
            return Err(SpanError::FileMismatch {
                begin: begin.filename().to_string(),
                end: end.filename().to_string(),
            });
        }
        let (b, e) = (begin.position().line_col(), end.position().line_col());
        if e < b {
            return Err(SpanError::Reversed { begin: b, end: e });
        }
        Ok(LineSpan { begin, end })
    }

    /// A span covering the single character `c`.
    pub fn at(c: LineChar) -> Self {
        LineSpan {
            begin: c.clone(),
            end: c,
        }
    }

    pub fn begin(&self) -> &LineChar {
        &self.begin
    }

    pub fn end(&self) -> &LineChar {
        &self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.begin.line() == self.end.line()
    }
}
