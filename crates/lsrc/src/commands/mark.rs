//! `mark`: render a diagnostic at a position or span of a file.
//!
//! ```text
//! lsr mark <file> <line>:<col> [<line>:<col>] [--severity=<s>] [--message=<text>] [--color=<mode>]
//! ```

use std::fmt;
use std::io::{Read, Write};

use lsr_diagnostic::{ColorMode, LineSpan, Severity, SpanError, TerminalEmitter};
use lsr_source::{LineChar, LineCharReader};

use super::open_chars;

/// A `line:column` pair given on the command line. Both are 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target {
    pub line: u32,
    pub column: u32,
}

impl Target {
    pub fn parse(s: &str) -> Result<Self, String> {
        let Some((line, column)) = s.split_once(':') else {
            return Err(format!("expected <line>:<col>, found '{s}'"));
        };
        let parse = |part: &str, what: &str| match part.parse::<u32>() {
            Ok(0) | Err(_) => Err(format!("invalid {what} '{part}' in '{s}'")),
            Ok(n) => Ok(n),
        };
        Ok(Target {
            line: parse(line, "line")?,
            column: parse(column, "column")?,
        })
    }

    fn matches(self, c: &LineChar) -> bool {
        c.line() == self.line && c.column() == self.column
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Presentation options for `mark`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkOptions {
    pub severity: Severity,
    pub message: String,
    pub color: ColorMode,
}

impl Default for MarkOptions {
    fn default() -> Self {
        MarkOptions {
            severity: Severity::Error,
            message: "marked here".to_string(),
            color: ColorMode::Auto,
        }
    }
}

/// A fully parsed `mark` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkRequest {
    pub path: String,
    pub begin: Target,
    pub end: Option<Target>,
    pub options: MarkOptions,
}

/// Parse the arguments following `mark`.
pub fn parse_mark_args(args: &[String]) -> Result<MarkRequest, String> {
    let mut options = MarkOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--severity=") {
            options.severity = value.parse::<Severity>().map_err(|e| e.to_string())?;
        } else if let Some(value) = arg.strip_prefix("--message=") {
            options.message = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value).ok_or_else(|| {
                format!("invalid color mode '{value}' (expected auto, always or never)")
            })?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.as_str());
        }
    }

    match positional.as_slice() {
        [path, begin] => Ok(MarkRequest {
            path: (*path).to_string(),
            begin: Target::parse(begin)?,
            end: None,
            options,
        }),
        [path, begin, end] => Ok(MarkRequest {
            path: (*path).to_string(),
            begin: Target::parse(begin)?,
            end: Some(Target::parse(end)?),
            options,
        }),
        _ => Err("expected <file> <line>:<col> [<line>:<col>]".to_string()),
    }
}

/// Why a `mark` request could not be rendered.
#[derive(Debug, PartialEq, Eq)]
pub enum MarkError {
    /// No character exists at the target position.
    NotFound(Target),
    /// The two targets do not form a valid span.
    Span(SpanError),
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkError::NotFound(target) => write!(f, "no character at {target}"),
            MarkError::Span(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarkError::NotFound(_) => None,
            MarkError::Span(e) => Some(e),
        }
    }
}

impl From<SpanError> for MarkError {
    fn from(e: SpanError) -> Self {
        MarkError::Span(e)
    }
}

/// Find the characters at `targets`, in a single pass over the input.
fn locate<R: Read>(
    reader: LineCharReader<R>,
    targets: &[Target],
) -> Result<Vec<LineChar>, MarkError> {
    let mut found: Vec<Option<LineChar>> = vec![None; targets.len()];
    for c in reader {
        for (slot, target) in found.iter_mut().zip(targets) {
            if slot.is_none() && target.matches(&c) {
                *slot = Some(c.clone());
            }
        }
        if found.iter().all(Option::is_some) {
            break;
        }
    }
    found
        .into_iter()
        .zip(targets)
        .map(|(slot, target)| slot.ok_or(MarkError::NotFound(*target)))
        .collect()
}

/// Render the requested diagnostic through `emitter`, followed by the
/// emitter's error/warning summary.
pub fn emit_mark<R: Read, W: Write>(
    reader: LineCharReader<R>,
    request: &MarkRequest,
    emitter: &mut TerminalEmitter<W>,
) -> Result<(), MarkError> {
    let MarkOptions {
        severity, message, ..
    } = &request.options;

    match request.end {
        None => {
            let mut found = locate(reader, &[request.begin])?;
            if let Some(c) = found.pop() {
                emitter.emit(&c, *severity, message);
            }
        }
        Some(end) => {
            let mut found = locate(reader, &[request.begin, end])?.into_iter();
            if let (Some(begin), Some(end)) = (found.next(), found.next()) {
                let span = LineSpan::new(begin, end)?;
                emitter.emit(&span, *severity, message);
            }
        }
    }
    tracing::debug!(
        errors = emitter.error_count(),
        warnings = emitter.warning_count(),
        "marked"
    );
    emitter.emit_summary();
    emitter.flush();
    Ok(())
}

/// Open the requested file and print the diagnostic to stderr.
pub fn mark_file(request: &MarkRequest) {
    let reader = open_chars(&request.path);
    let mut emitter = TerminalEmitter::stderr(request.options.color);
    if let Err(e) = emit_mark(reader, request, &mut emitter) {
        eprintln!("error: {}: {e}", request.path);
        std::process::exit(1);
    }
}
