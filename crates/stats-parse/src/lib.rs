//! Line parser for numeric text input
//!
//! Converts raw lines into a [`SampleSet`]. Each line is trimmed and read as a
//! base-10 float (decimal or scientific notation, optional sign). A line that
//! fails is logged as a [`ParseError`] and parsing moves on; one bad line never
//! aborts the run.
//!
//! # Example
//!
//! ```rust
//! use stats_parse::parse_str;
//!
//! let set = parse_str("1.5\n  2e1 \nabc\n");
//! assert_eq!(set.values(), vec![1.5, 20.0]);
//! assert_eq!(set.errors()[0].line_number(), 3);
//! assert_eq!(set.errors()[0].raw_text(), "abc");
//! ```

use std::io::BufRead;

use stats_core::{NumericSample, ParseError, ParseErrorKind, Result, SampleSet};
use tracing::debug;

/// Interpret a single trimmed token
///
/// Rejects anything `f64::from_str` rejects, and also rejects tokens that
/// parse to NaN or an infinity.
pub fn parse_token(token: &str) -> std::result::Result<f64, ParseErrorKind> {
    let value: f64 = token.parse().map_err(|_| ParseErrorKind::Malformed)?;
    if !value.is_finite() {
        return Err(ParseErrorKind::NonFinite);
    }
    Ok(value)
}

/// Parse a sequence of lines, numbering them from 1
pub fn parse_lines<I, S>(lines: I) -> SampleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = SampleSet::new();
    for (index, line) in lines.into_iter().enumerate() {
        record_line(&mut set, index + 1, line.as_ref());
    }
    set
}

/// Parse in-memory text, one token per line
pub fn parse_str(text: &str) -> SampleSet {
    parse_lines(text.lines())
}

/// Parse lines from a reader
///
/// I/O failures (including invalid UTF-8) abort with [`stats_core::Error::Io`];
/// malformed numbers do not.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SampleSet> {
    let mut set = SampleSet::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        record_line(&mut set, index + 1, &line);
    }
    Ok(set)
}

fn record_line(set: &mut SampleSet, line_number: usize, line: &str) {
    let item = line.trim();
    match parse_token(item) {
        Ok(value) => set.push_sample(NumericSample::new(value, line_number)),
        Err(kind) => {
            debug!(line_number, text = item, kind = kind.name(), "rejected line");
            set.push_error(ParseError::new(line_number, item, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_accepts_float_syntax() {
        assert_eq!(parse_token("42"), Ok(42.0));
        assert_eq!(parse_token("-3.25"), Ok(-3.25));
        assert_eq!(parse_token("+7"), Ok(7.0));
        assert_eq!(parse_token(".5"), Ok(0.5));
        assert_eq!(parse_token("5."), Ok(5.0));
        assert_eq!(parse_token("1e3"), Ok(1000.0));
        assert_eq!(parse_token("2.5E-2"), Ok(0.025));
    }

    #[test]
    fn test_parse_token_rejects() {
        assert_eq!(parse_token(""), Err(ParseErrorKind::Malformed));
        assert_eq!(parse_token("abc"), Err(ParseErrorKind::Malformed));
        assert_eq!(parse_token("1,5"), Err(ParseErrorKind::Malformed));
        assert_eq!(parse_token("1 2"), Err(ParseErrorKind::Malformed));
        assert_eq!(parse_token("0x10"), Err(ParseErrorKind::Malformed));
        assert_eq!(parse_token("nan"), Err(ParseErrorKind::NonFinite));
        assert_eq!(parse_token("-inf"), Err(ParseErrorKind::NonFinite));
        assert_eq!(parse_token("1e400"), Err(ParseErrorKind::NonFinite));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let set = parse_lines(["  12.5\t", "\t-1 "]);
        assert_eq!(set.values(), vec![12.5, -1.0]);
        assert!(set.errors().is_empty());
    }

    #[test]
    fn test_error_keeps_trimmed_text_and_line() {
        let set = parse_lines(["1", "  oops  ", "3"]);
        assert_eq!(set.values(), vec![1.0, 3.0]);
        assert_eq!(set.errors().len(), 1);
        assert_eq!(set.errors()[0].line_number(), 2);
        assert_eq!(set.errors()[0].raw_text(), "oops");
        assert_eq!(set.samples()[1].line_number(), 3);
    }

    #[test]
    fn test_blank_interior_line_is_an_error() {
        let set = parse_str("1\n\n2\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.errors().len(), 1);
        assert_eq!(set.errors()[0].line_number(), 2);
        assert_eq!(set.errors()[0].raw_text(), "");
    }

    #[test]
    fn test_empty_input() {
        let set = parse_str("");
        assert!(set.is_empty());
        assert_eq!(set.lines_seen(), 0);
    }

    #[test]
    fn test_parse_reader_handles_crlf() {
        let input = "1\r\n2\r\nx\r\n";
        let set = parse_reader(input.as_bytes()).unwrap();
        assert_eq!(set.values(), vec![1.0, 2.0]);
        assert_eq!(set.errors()[0].raw_text(), "x");
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'1', b'\n', 0xff, 0xfe, b'\n'];
        assert!(parse_reader(bytes).is_err());
    }
}
