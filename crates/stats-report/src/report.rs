//! Rendering of computed statistics
//!
//! The text block has a fixed field order:
//!
//! ```text
//! Mean: 3.0
//! Median: 3.0
//! Mode: 1.0, 2.0, 3.0, 4.0, 5.0
//! Variance: 2.0
//! Standard Deviation: 1.41
//! Time elapsed: 0.0012 seconds
//! ```
//!
//! Values use the shortest representation that reads back to the same `f64`,
//! with a fractional part in positional form (`3.0`) and a signed, at least
//! two-digit exponent from `1e16` upwards or below `1e-4` (`1e+16`, `1e-05`).
//! Overflowed statistics print as `inf`.

use std::fmt;

use serde::Serialize;
use stats_core::{Error, ParseError, Result};
use stats_moments::StatisticsResult;

use crate::config::OutputFormat;

/// Text shown in place of modes when there are none
pub const NO_MODE: &str = "No mode";

/// Statistics of one run together with its rejected lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    result: StatisticsResult,
    errors: Vec<ParseError>,
}

impl Report {
    /// Pair a result with the parse log
    ///
    /// A non-empty sample always has at least one mode, so an empty mode set
    /// with `sample_count > 0` is rejected as an inconsistent result.
    pub fn new(result: StatisticsResult, errors: Vec<ParseError>) -> Result<Self> {
        if result.modes.is_empty() && result.sample_count > 0 {
            return Err(Error::InvalidInput(format!(
                "no modes reported for {} samples",
                result.sample_count
            )));
        }
        Ok(Self { result, errors })
    }

    pub fn result(&self) -> &StatisticsResult {
        &self.result
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The report block, newline terminated
    pub fn render(&self) -> String {
        let r = &self.result;
        let modes = if r.modes.is_empty() {
            NO_MODE.to_string()
        } else {
            r.modes
                .iter()
                .map(|&m| format_value(m))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Mean: {}\nMedian: {}\nMode: {}\nVariance: {}\nStandard Deviation: {}\nTime elapsed: {:.4} seconds\n",
            format_value(r.mean),
            format_value(r.median),
            modes,
            format_value(r.variance),
            format_value(r.standard_deviation),
            r.elapsed_seconds,
        )
    }

    /// One line per rejected input line
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render for the console in the requested format
    pub fn render_as(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Shortest round-trip form: `3.0`, `1.41`, `1e+16`, `2.5e-05`, `inf`
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Debug already switches to exponent form at the same thresholds
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
