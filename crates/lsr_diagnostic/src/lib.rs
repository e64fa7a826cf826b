//! Compiler-style diagnostics for positions read by `lsr_source`.
//!
//! A report is a header naming the position, severity and message, followed
//! by the source line and an underline row:
//!
//! ```text
//! <filename>:<line>:<column>: <severity>: <message>
//! Hello,
//!     ^~ ...
//! World!
//! ~~~
//! ```
//!
//! Three things can be reported:
//!
//! - a [`LineChar`](lsr_source::LineChar): caret under one column
//! - a [`Line`](lsr_source::Line): the line without an underline
//! - a [`LineSpan`]: caret and tildes from `begin` to `end`, over at most
//!   two displayed lines
//!
//! [`Report::message_str`] returns the rendered text; [`TerminalEmitter`]
//! writes it to a stream with optional color.

pub mod emitter;
mod render;
mod severity;
mod span;

pub use emitter::{ColorMode, TerminalEmitter};
pub use render::{Excerpt, Report};
pub use severity::{ParseSeverityError, Severity};
pub use span::{LineSpan, SpanError};
