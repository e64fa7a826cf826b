//! Command handlers for the `lsr` CLI.
//!
//! Shared file-opening helpers live here; they report failures the same way
//! for every command and exit with status 1.

use std::fs::File;

use lsr_source::{LineCharReader, LineReader, SourceError};

mod dump;
mod mark;

pub use dump::{dump_chars, dump_lines, write_chars, write_lines};
pub use mark::{emit_mark, mark_file, parse_mark_args, MarkError, MarkOptions, MarkRequest, Target};

/// Human-readable reason an input could not be opened.
pub fn describe_open_error(err: &SourceError) -> String {
    let path = err.path().display();
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => err.to_string(),
    }
}

fn exit_with(err: &SourceError) -> ! {
    eprintln!("error: {}", describe_open_error(err));
    std::process::exit(1);
}

pub(crate) fn open_lines(path: &str) -> LineReader<File> {
    LineReader::open(path).unwrap_or_else(|e| exit_with(&e))
}

pub(crate) fn open_chars(path: &str) -> LineCharReader<File> {
    LineCharReader::open(path).unwrap_or_else(|e| exit_with(&e))
}
