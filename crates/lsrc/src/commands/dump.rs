//! `lines` and `chars`: show how an input is split.

use std::io::{self, Read, Write};

use lsr_source::{LineChar, LineCharKind, LineCharReader, LineReader};

use super::{open_chars, open_lines};

/// Write one row per line: position, terminator kind, text.
///
/// Line text is copied through as raw bytes. Returns the number of lines
/// written.
pub fn write_lines<R: Read, W: Write>(mut reader: LineReader<R>, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    while let Some((line, terminator)) = reader.read_line_with_terminator() {
        write!(out, "{}: [{terminator}] ", line.position())?;
        out.write_all(line.text())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    tracing::debug!(bytes = reader.bytes_consumed(), lines = count, "wrote lines");
    Ok(count)
}

/// Write one row per character: position and the escaped character.
///
/// Returns the number of characters written, synthetic line ends included.
pub fn write_chars<R: Read, W: Write>(
    mut reader: LineCharReader<R>,
    out: &mut W,
) -> io::Result<usize> {
    let mut count = 0;
    for c in reader.by_ref() {
        writeln!(out, "{}: {}", c.position(), describe(&c))?;
        count += 1;
    }
    tracing::debug!(bytes = reader.bytes_consumed(), chars = count, "wrote characters");
    Ok(count)
}

fn describe(c: &LineChar) -> String {
    match c.kind() {
        LineCharKind::Content(byte) => format!("'{}'", std::ascii::escape_default(byte)),
        LineCharKind::LineEnd => "end of line".to_string(),
    }
}

/// Lex a file into lines and print them to stdout.
pub fn dump_lines(path: &str) {
    let reader = open_lines(path);
    let mut stdout = io::stdout().lock();
    match write_lines(reader, &mut stdout) {
        Ok(_) => tracing::debug!(path, "dumped lines"),
        Err(e) => report_write_error(&e),
    }
}

/// Read a file character by character and print every position to stdout.
pub fn dump_chars(path: &str) {
    let reader = open_chars(path);
    let mut stdout = io::stdout().lock();
    match write_chars(reader, &mut stdout) {
        Ok(_) => tracing::debug!(path, "dumped characters"),
        Err(e) => report_write_error(&e),
    }
}

fn report_write_error(e: &io::Error) {
    // A closed pipe (`lsr lines f | head`) is not worth a message.
    if e.kind() != io::ErrorKind::BrokenPipe {
        eprintln!("error: writing output: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
