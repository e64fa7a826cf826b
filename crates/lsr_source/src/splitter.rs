//! Terminator-normalizing line splitter.
//!
//! Reads the byte source in fixed-size chunks and scans each chunk for the
//! next `\n` or `\r` with `memchr2`. Only one byte of lookahead is ever
//! needed: after a `\r`, the following byte is peeked to collapse `\r\n`.
//! A `\n` is never merged with a following `\r`.
//!
//! # I/O Failures
//!
//! Read errors other than [`ErrorKind::Interrupted`] end the stream at this
//! layer. Whether a failure should be distinguished from EOF is the source's
//! concern; the splitter logs it and reports no further lines.

use std::fmt;
use std::io::{ErrorKind, Read};

use tracing::{debug, trace, warn};

/// Bytes requested from the source per read.
const CHUNK_SIZE: usize = 4096;

/// How a logical line ended in the raw byte stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// A lone `\n`.
    Lf,
    /// A lone `\r`.
    Cr,
    /// The two-byte sequence `\r\n`.
    CrLf,
    /// No terminator: the stream ended after this line's content.
    Eof,
}

impl Terminator {
    /// Number of raw bytes the terminator occupied.
    pub const fn byte_len(self) -> usize {
        match self {
            Terminator::Lf | Terminator::Cr => 1,
            Terminator::CrLf => 2,
            Terminator::Eof => 0,
        }
    }

    /// Whether the line was actually terminated (as opposed to cut by EOF).
    pub const fn is_terminated(self) -> bool {
        !matches!(self, Terminator::Eof)
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Lf => write!(f, "LF"),
            Terminator::Cr => write!(f, "CR"),
            Terminator::CrLf => write!(f, "CRLF"),
            Terminator::Eof => write!(f, "EOF"),
        }
    }
}

/// One logical line as produced by [`LineSplitter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitLine {
    /// Raw line content with the terminator stripped. Not decoded.
    pub text: Vec<u8>,
    /// The terminator that ended the line.
    pub terminator: Terminator,
}

/// Splits a byte stream into logical lines.
///
/// Owns the source and a forward-only cursor (`buf[pos..end]` holds bytes
/// read but not yet consumed). There is no rewind.
pub struct LineSplitter<R> {
    source: R,
    buf: Box<[u8]>,
    pos: usize,
    end: usize,
    eof: bool,
    consumed: u64,
}

impl<R: Read> LineSplitter<R> {
    /// Create a splitter reading from `source` in 4 KiB chunks.
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, CHUNK_SIZE)
    }

    /// Create a splitter with an explicit read size (minimum 1 byte).
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        LineSplitter {
            source,
            buf: vec![0u8; chunk_size.max(1)].into_boxed_slice(),
            pos: 0,
            end: 0,
            eof: false,
            consumed: 0,
        }
    }

    /// Read the next logical line.
    ///
    /// Returns `None` once the stream is exhausted. A stream that ends
    /// exactly on a terminator does not produce a trailing empty line.
    pub fn next_line(&mut self) -> Option<SplitLine> {
        let mut text = Vec::new();
        loop {
            if self.pos == self.end && !self.fill() {
                if text.is_empty() {
                    return None;
                }
                return Some(SplitLine {
                    text,
                    terminator: Terminator::Eof,
                });
            }

            let pending = &self.buf[self.pos..self.end];
            if let Some(idx) = memchr::memchr2(b'\n', b'\r', pending) {
                let byte = pending[idx];
                text.extend_from_slice(&pending[..idx]);
                self.consume(idx + 1);

                let terminator = if byte == b'\n' {
                    Terminator::Lf
                } else if self.next_is_lf() {
                    self.consume(1);
                    Terminator::CrLf
                } else {
                    Terminator::Cr
                };
                return Some(SplitLine { text, terminator });
            }

            text.extend_from_slice(pending);
            let len = pending.len();
            self.consume(len);
        }
    }

    /// Total raw bytes consumed so far, terminators included.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Release the splitter, returning the underlying source.
    ///
    /// Bytes already read into the internal buffer but not yet returned as
    /// part of a line are discarded.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Peek one byte past a `\r`, refilling if needed. May block.
    fn next_is_lf(&mut self) -> bool {
        if self.pos == self.end && !self.fill() {
            return false;
        }
        self.buf[self.pos] == b'\n'
    }

    fn consume(&mut self, n: usize) {
        self.pos += n;
        self.consumed += n as u64;
    }

    /// Refill the buffer from the source. Only called once `pos == end`.
    fn fill(&mut self) -> bool {
        debug_assert_eq!(self.pos, self.end, "refill with unconsumed bytes");
        if self.eof {
            return false;
        }
        loop {
            match self.source.read(&mut self.buf) {
                Ok(0) => {
                    debug!(bytes = self.consumed, "end of input");
                    self.eof = true;
                    return false;
                }
                Ok(n) => {
                    trace!(bytes = n, "refilled line buffer");
                    self.pos = 0;
                    self.end = n;
                    return true;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    warn!(error = %e, bytes = self.consumed, "read failed, treating as end of input");
                    self.eof = true;
                    return false;
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineSplitter<R> {
    type Item = SplitLine;

    fn next(&mut self) -> Option<SplitLine> {
        self.next_line()
    }
}
