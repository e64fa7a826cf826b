//! Line and character readers over arbitrary byte streams.
//!
//! Converts a raw byte stream into logical lines and characters with
//! `(filename, line, column)` coordinates. Four line-terminator conventions
//! are normalized into one coordinate system:
//!
//! | bytes      | effect                                          |
//! |------------|-------------------------------------------------|
//! | `\n`       | ends the line                                   |
//! | `\r`       | ends the line                                   |
//! | `\r\n`     | ends the line (merged into a single terminator) |
//! | `\n\r`     | two terminators, with an empty line in between  |
//!
//! Two consumers share the same splitting logic:
//!
//! - [`LineReader`] yields one [`Line`] at a time.
//! - [`LineCharReader`] yields one [`LineChar`] at a time, including a
//!   synthetic `'\n'` at the end of every line, even a final line
//!   cut off by EOF.
//!
//! Line text is kept as raw bytes and never decoded. Columns are byte
//! positions, 1-based, and no Unicode width handling is done.
//!
//! ```
//! use lsr_source::LineReader;
//!
//! let mut reader = LineReader::new("<doc>", "Hello\r\nWorld".as_bytes());
//! let first = reader.read_line();
//! assert_eq!(first.as_ref().map(|l| l.text()), Some(&b"Hello"[..]));
//! let second = reader.read_line();
//! assert_eq!(second.as_ref().map(|l| l.line()), Some(2));
//! assert!(reader.read_line().is_none());
//! ```

mod char_reader;
mod error;
mod line_reader;
mod position;
mod splitter;

#[cfg(test)]
mod test_support;

pub use char_reader::LineCharReader;
pub use error::SourceError;
pub use line_reader::LineReader;
pub use position::{Line, LineChar, LineCharKind, Position};
pub use splitter::{LineSplitter, SplitLine, Terminator};
