//! Terminal Emitter
//!
//! Writes rendered reports to a stream, with optional ANSI color. Without
//! color the output is byte-for-byte what [`Report::message_str`] returns.

use std::io::{self, IsTerminal, Write};

use crate::{Excerpt, Report, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const INFO: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
        Severity::Note => colors::NOTE,
        Severity::Info => colors::INFO,
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always` or `never`.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Keeps a count of errors and warnings emitted so callers can finish with
/// [`emit_summary`](Self::emit_summary). Write failures are ignored: a
/// diagnostic that cannot be printed has nowhere else to go.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    error_count: usize,
    warning_count: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Emit one report.
    pub fn emit(&mut self, report: &impl Report, severity: Severity, message: &str) {
        match severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note | Severity::Info => {}
        }

        if !self.colors {
            let _ = self
                .writer
                .write_all(report.message_str(severity, message).as_bytes());
            return;
        }

        let color = severity_color(severity);
        let _ = writeln!(
            self.writer,
            "{}{}{}: {color}{severity}{}: {message}",
            colors::BOLD,
            report.position(),
            colors::RESET,
            colors::RESET,
        );
        for Excerpt { source, underline } in report.excerpt() {
            let _ = writeln!(self.writer, "{source}");
            if let Some(underline) = underline {
                let _ = writeln!(self.writer, "{color}{underline}{}", colors::RESET);
            }
        }
    }

    pub fn error(&mut self, report: &impl Report, message: &str) {
        self.emit(report, Severity::Error, message);
    }

    pub fn warning(&mut self, report: &impl Report, message: &str) {
        self.emit(report, Severity::Warning, message);
    }

    pub fn note(&mut self, report: &impl Report, message: &str) {
        self.emit(report, Severity::Note, message);
    }

    pub fn info(&mut self, report: &impl Report, message: &str) {
        self.emit(report, Severity::Info, message);
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Flush and hand back the writer.
    pub fn into_inner(mut self) -> W {
        self.flush();
        self.writer
    }

    /// Emit a summary of the errors and warnings seen so far.
    pub fn emit_summary(&mut self) {
        let (errors, warnings) = (self.error_count, self.warning_count);
        if errors == 0 && warnings == 0 {
            return;
        }

        let (severity, lead) = if errors > 0 {
            (Severity::Error, format!("{errors} error{}", plural_s(errors)))
        } else {
            (
                Severity::Warning,
                format!("{warnings} warning{}", plural_s(warnings)),
            )
        };
        self.write_severity(severity);
        if errors > 0 && warnings > 0 {
            let _ = writeln!(
                self.writer,
                ": {lead} and {warnings} warning{} emitted",
                plural_s(warnings)
            );
        } else {
            let _ = writeln!(self.writer, ": {lead} emitted");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        if self.colors {
            let color = severity_color(severity);
            let _ = write!(self.writer, "{color}{severity}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{severity}");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr, detecting whether it is a TTY.
    pub fn stderr(mode: ColorMode) -> Self {
        let stderr = io::stderr();
        let is_tty = stderr.is_terminal();
        TerminalEmitter::with_color_mode(stderr, mode, is_tty)
    }
}
