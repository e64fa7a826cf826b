//! Plain-text rendering of reports.
//!
//! # Layout
//!
//! ```text
//! <position>: <severity>: <message>
//! <source line>
//! <underline>          (absent for whole-line reports)
//! [<source line>       (second line of a multi-line span)
//!  <underline>]
//! ```
//!
//! Underlines are measured in byte columns of the line text. Source lines
//! are shown with each byte of an invalid UTF-8 sequence replaced by `?`,
//! so the displayed line has exactly as many bytes as the input line and
//! the underline stays aligned.

use std::borrow::Cow;

use lsr_source::{Line, LineChar, Position};

use crate::{LineSpan, Severity};

/// Appended to the first underline of a span that continues on a later line.
const CONTINUATION: &str = " ...";

/// Stand-in for a byte that is not part of valid UTF-8.
const INVALID_BYTE: char = '?';

/// One displayed source line and the row printed beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Excerpt<'a> {
    pub source: Cow<'a, str>,
    pub underline: Option<String>,
}

/// Something that can be rendered as a diagnostic.
pub trait Report {
    /// Position named in the header.
    fn position(&self) -> &Position;

    /// Source lines to display, in order, each with its underline.
    fn excerpt(&self) -> Vec<Excerpt<'_>>;

    /// Render the full report, every line newline-terminated.
    fn message_str(&self, severity: Severity, message: &str) -> String {
        let mut out = format!("{}: {severity}: {message}\n", self.position());
        for Excerpt { source, underline } in self.excerpt() {
            out.push_str(&source);
            out.push('\n');
            if let Some(underline) = underline {
                out.push_str(&underline);
                out.push('\n');
            }
        }
        out
    }
}

/// Decode `bytes` for display without changing their length.
pub(crate) fn display_text(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(text) => {
                out.push_str(text);
                return Cow::Owned(out);
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // `valid_up_to` guarantees this prefix decodes.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let bad = e.error_len().unwrap_or(after.len());
                for _ in 0..bad {
                    out.push(INVALID_BYTE);
                }
                rest = &after[bad..];
            }
        }
    }
}

/// `column - 1` spaces, a caret, then `tildes` tildes.
fn caret_row(column: u32, tildes: usize) -> String {
    let pad = (column as usize).saturating_sub(1);
    let mut row = String::with_capacity(pad + 1 + tildes + CONTINUATION.len());
    row.push_str(&" ".repeat(pad));
    row.push('^');
    row.push_str(&"~".repeat(tildes));
    row
}

impl Report for Line {
    fn position(&self) -> &Position {
        Line::position(self)
    }

    fn excerpt(&self) -> Vec<Excerpt<'_>> {
        vec![Excerpt {
            source: display_text(self.text()),
            underline: None,
        }]
    }
}

impl Report for LineChar {
    fn position(&self) -> &Position {
        LineChar::position(self)
    }

    fn excerpt(&self) -> Vec<Excerpt<'_>> {
        vec![Excerpt {
            source: display_text(self.text()),
            underline: Some(caret_row(self.column(), 0)),
        }]
    }
}

impl Report for LineSpan {
    fn position(&self) -> &Position {
        self.begin().position()
    }

    /// Only the first and last lines of a span are shown; lines in between
    /// are skipped.
    fn excerpt(&self) -> Vec<Excerpt<'_>> {
        let (begin, end) = (self.begin(), self.end());
        if self.is_single_line() {
            let tildes = end.column().saturating_sub(begin.column()) as usize;
            return vec![Excerpt {
                source: display_text(begin.text()),
                underline: Some(caret_row(begin.column(), tildes)),
            }];
        }

        // Tildes run to the end of the visible content; a span starting on
        // the synthetic terminator gets none.
        let tildes = begin.text().len().saturating_sub(begin.column() as usize);
        let mut first = caret_row(begin.column(), tildes);
        first.push_str(CONTINUATION);
        vec![
            Excerpt {
                source: display_text(begin.text()),
                underline: Some(first),
            },
            Excerpt {
                source: display_text(end.text()),
                underline: Some("~".repeat(end.column() as usize)),
            },
        ]
    }
}
