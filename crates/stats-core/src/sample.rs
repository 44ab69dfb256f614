//! Parsed samples and per-line diagnostics
//!
//! A [`SampleSet`] records exactly one outcome for every input line: either a
//! [`NumericSample`] or a [`ParseError`]. Both logs keep file order.

use serde::Serialize;
use std::fmt;

/// A single parsed value with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSample {
    value: f64,
    line_number: usize,
}

impl NumericSample {
    pub fn new(value: f64, line_number: usize) -> Self {
        Self { value, line_number }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// Not a base-10 floating point number
    Malformed,
    /// Parsed, but to NaN or an infinity
    NonFinite,
}

impl ParseErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::NonFinite => "non-finite",
        }
    }
}

/// A rejected input line
///
/// Recoverable: the run continues over the remaining lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    line_number: usize,
    raw_text: String,
    kind: ParseErrorKind,
}

impl ParseError {
    /// `raw_text` is the trimmed line content
    pub fn new(line_number: usize, raw_text: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line_number,
            raw_text: raw_text.into(),
            kind,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data at line {}: '{}'", self.line_number, self.raw_text)
    }
}

impl std::error::Error for ParseError {}

/// Valid samples plus the parallel log of rejected lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<NumericSample>,
    errors: Vec<ParseError>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(lines: usize) -> Self {
        Self {
            samples: Vec::with_capacity(lines),
            errors: Vec::new(),
        }
    }

    pub fn push_sample(&mut self, sample: NumericSample) {
        self.samples.push(sample);
    }

    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn samples(&self) -> &[NumericSample] {
        &self.samples
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Sample values in file order
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(NumericSample::value).collect()
    }

    /// Number of valid samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total lines consumed: one outcome per line
    pub fn lines_seen(&self) -> usize {
        self.samples.len() + self.errors.len()
    }

    /// Split into the owned sample and error logs
    pub fn into_parts(self) -> (Vec<NumericSample>, Vec<ParseError>) {
        (self.samples, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(4, "abc", ParseErrorKind::Malformed);
        assert_eq!(err.to_string(), "Invalid data at line 4: 'abc'");
        assert_eq!(err.kind().name(), "malformed");
    }

    #[test]
    fn test_sample_set_bookkeeping() {
        let mut set = SampleSet::new();
        assert!(set.is_empty());

        set.push_sample(NumericSample::new(1.5, 1));
        set.push_error(ParseError::new(2, "x", ParseErrorKind::Malformed));
        set.push_sample(NumericSample::new(-2.0, 3));

        assert_eq!(set.len(), 2);
        assert_eq!(set.lines_seen(), 3);
        assert_eq!(set.values(), vec![1.5, -2.0]);
        assert_eq!(set.samples()[1].line_number(), 3);
        assert_eq!(set.errors()[0].line_number(), 2);

        let (samples, errors) = set.into_parts();
        assert_eq!(samples.len(), 2);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_parse_error_serializes_kind() {
        let err = ParseError::new(7, "inf", ParseErrorKind::NonFinite);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"line_number":7,"raw_text":"inf","kind":"non_finite"}"#);
    }
}
