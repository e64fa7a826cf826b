use pretty_assertions::assert_eq;

use super::*;

fn lines_of(input: &str) -> (usize, String) {
    let mut out = Vec::new();
    let count = match write_lines(LineReader::new("<in>", input.as_bytes()), &mut out) {
        Ok(n) => n,
        Err(e) => panic!("write failed: {e}"),
    };
    (count, String::from_utf8_lossy(&out).into_owned())
}

fn chars_of(input: &str) -> (usize, String) {
    chars_of_bytes(input.as_bytes())
}

fn chars_of_bytes(input: &[u8]) -> (usize, String) {
    let mut out = Vec::new();
    let count = match write_chars(LineCharReader::new("<in>", input), &mut out) {
        Ok(n) => n,
        Err(e) => panic!("write failed: {e}"),
    };
    (count, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn lines_show_terminators() {
    assert_eq!(
        lines_of("Hello\n\rWorld\r\nend"),
        (
            4,
            "<in>:1: [LF] Hello\n\
             <in>:2: [CR] \n\
             <in>:3: [CRLF] World\n\
             <in>:4: [EOF] end\n"
                .to_string()
        )
    );
}

#[test]
fn chars_show_line_ends() {
    assert_eq!(
        chars_of("Hi\rW"),
        (
            5,
            "<in>:1:1: 'H'\n\
             <in>:1:2: 'i'\n\
             <in>:1:3: end of line\n\
             <in>:2:1: 'W'\n\
             <in>:2:2: end of line\n"
                .to_string()
        )
    );
}

#[test]
fn chars_escape_control_bytes() {
    let (_, out) = chars_of("\t'\n");
    assert_eq!(
        out,
        "<in>:1:1: '\\t'\n<in>:1:2: '\\''\n<in>:1:3: end of line\n"
    );
}

#[test]
fn lines_copy_invalid_bytes_through() {
    let mut out = Vec::new();
    let reader = LineReader::new("<in>", &b"a\xFFb\r\n"[..]);
    assert_eq!(write_lines(reader, &mut out).ok(), Some(1));
    assert_eq!(out, b"<in>:1: [CRLF] a\xFFb\n".to_vec());
}

#[test]
fn chars_escape_invalid_bytes() {
    let (count, out) = chars_of_bytes(b"\xFF\n");
    assert_eq!(count, 2);
    assert_eq!(out, "<in>:1:1: '\\xff'\n<in>:1:2: end of line\n");
}

#[test]
fn empty_input_writes_nothing() {
    assert_eq!(lines_of(""), (0, String::new()));
    assert_eq!(chars_of(""), (0, String::new()));
}
