use std::io::{self, Write};

use crossterm::style::Stylize;

/// Severity of a status sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

/// Write one status line, green for success and red for failure when color
/// is on.
pub(crate) fn write_status<W: Write>(
    out: &mut W,
    text: &str,
    kind: StatusKind,
    color: bool,
) -> io::Result<()> {
    if !color {
        return writeln!(out, "{text}");
    }
    match kind {
        StatusKind::Info => writeln!(out, "{}", text.green()),
        StatusKind::Error => writeln!(out, "{}", text.red()),
    }
}

/// Strip the line terminator left by `read_line`.
pub(crate) fn chomp(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_has_no_escape_codes() {
        let mut out = Vec::new();
        write_status(&mut out, "Book returned successfully.", StatusKind::Info, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Book returned successfully.\n");
    }

    #[test]
    fn colored_status_keeps_the_sentence_intact() {
        let mut out = Vec::new();
        write_status(&mut out, "Book was not borrowed.", StatusKind::Error, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Book was not borrowed."));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn chomp_keeps_inner_whitespace() {
        assert_eq!(chomp("Earth: A History\r\n"), "Earth: A History");
        assert_eq!(chomp(" padded \n"), " padded ");
    }
}
