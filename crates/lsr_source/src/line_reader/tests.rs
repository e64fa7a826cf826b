use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::{FailAfter, Trickle};

fn ascii(text: &[u8]) -> String {
    String::from_utf8_lossy(text).into_owned()
}

/// `(text, line, column)` for every line, checking the filename on the way.
fn read_all(name: &str, input: &str) -> Vec<(String, u32, u32)> {
    let mut reader = LineReader::new(name, input.as_bytes());
    let mut out = Vec::new();
    while let Some(line) = reader.read_line() {
        assert_eq!(line.filename(), name);
        out.push((ascii(line.text()), line.line(), line.column()));
    }
    assert!(reader.read_line().is_none(), "reader must stay exhausted");
    out
}

fn expect(lines: &[&str]) -> Vec<(String, u32, u32)> {
    lines
        .iter()
        .zip(1..)
        .map(|(text, n)| ((*text).to_string(), n, 0))
        .collect()
}

#[test]
fn single_line_with_lf() {
    assert_eq!(
        read_all("<string1>", "Hello World\n"),
        expect(&["Hello World"])
    );
}

#[test]
fn lf_separated() {
    assert_eq!(
        read_all("<string2>", "Hello\nWorld"),
        expect(&["Hello", "World"])
    );
}

#[test]
fn cr_separated() {
    assert_eq!(
        read_all("<string3>", "Hello\rWorld"),
        expect(&["Hello", "World"])
    );
}

#[test]
fn crlf_separated() {
    assert_eq!(
        read_all("<string4>", "Hello\r\nWorld"),
        expect(&["Hello", "World"])
    );
}

#[test]
fn lfcr_yields_empty_middle_line() {
    assert_eq!(
        read_all("<string5>", "Hello\n\rWorld"),
        expect(&["Hello", "", "World"])
    );
}

#[test]
fn every_terminator_ends_exactly_one_line() {
    for input in ["Hello", "Hello\n", "Hello\r", "Hello\r\n"] {
        assert_eq!(read_all("<t>", input), expect(&["Hello"]), "input {input:?}");
    }
}

#[test]
fn trailing_lfcr_gives_empty_last_line() {
    assert_eq!(read_all("<t>", "Hello\n\r"), expect(&["Hello", ""]));
}

#[test]
fn reports_terminators() {
    let mut reader = LineReader::new("<t>", "a\r\nb\rc\nd".as_bytes());
    let mut kinds = Vec::new();
    while let Some((_, terminator)) = reader.read_line_with_terminator() {
        kinds.push(terminator);
    }
    assert_eq!(
        kinds,
        vec![
            Terminator::CrLf,
            Terminator::Cr,
            Terminator::Lf,
            Terminator::Eof
        ]
    );
}

#[test]
fn iterator_matches_read_line() {
    let lines: Vec<_> = LineReader::new("<it>", Trickle::new(b"x\ny\r\nz", 2))
        .map(|l| (l.line(), ascii(l.text())))
        .collect();
    assert_eq!(
        lines,
        vec![
            (1, "x".to_string()),
            (2, "y".to_string()),
            (3, "z".to_string())
        ]
    );
}

#[test]
fn non_utf8_lines_are_kept_raw() {
    let mut reader = LineReader::new("<raw>", &b"caf\xE9\r\n\xFF"[..]);
    let texts: Vec<Vec<u8>> = std::iter::from_fn(|| reader.read_line())
        .map(|l| l.text().to_vec())
        .collect();
    assert_eq!(texts, vec![b"caf\xE9".to_vec(), b"\xFF".to_vec()]);
    assert_eq!(reader.bytes_consumed(), 7);
}

#[test]
fn bytes_consumed_tracks_lines_read() {
    let mut reader = LineReader::new("<n>", "ab\r\ncd\n".as_bytes());
    assert_eq!(reader.bytes_consumed(), 0);
    let _ = reader.read_line();
    assert_eq!(reader.bytes_consumed(), 4);
    let _ = reader.read_line();
    assert_eq!(reader.bytes_consumed(), 7);
}

#[test]
fn read_failure_looks_like_eof() {
    let mut reader = LineReader::new("<fail>", FailAfter::new(b"ok\n", std::io::ErrorKind::Other));
    assert_eq!(reader.read_line().map(|l| l.line()), Some(1));
    assert!(reader.read_line().is_none());
    assert_eq!(reader.into_inner().failures(), 1);
}

#[test]
fn open_reads_file_and_uses_path_as_filename() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("tempfile: {e}"),
    };
    if let Err(e) = file.write_all(b"first\r\nsecond\n") {
        panic!("write: {e}");
    }
    let path = file.path().to_path_buf();

    let mut reader = match LineReader::open(&path) {
        Ok(r) => r,
        Err(e) => panic!("open: {e}"),
    };
    assert_eq!(reader.filename(), path.display().to_string());
    let first = reader.read_line();
    assert_eq!(first.as_ref().map(Line::text), Some(&b"first"[..]));
    let second = reader.read_line();
    assert_eq!(second.as_ref().map(Line::line), Some(2));
    assert!(reader.read_line().is_none());
    reader.close();
}

#[test]
fn open_missing_file_fails() {
    let dir = match tempfile::tempdir() {
        Ok(d) => d,
        Err(e) => panic!("tempdir: {e}"),
    };
    let missing = dir.path().join("missing.txt");
    let Err(err) = LineReader::open(&missing) else {
        panic!("opening a missing file must fail");
    };
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().starts_with("cannot open '"));
    assert!(std::error::Error::source(&err).is_some());
}
