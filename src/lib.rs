//! Descriptive statistics for line-oriented numeric files
//!
//! Re-exports the pipeline crates:
//!
//! - [`stats_core`]: samples, errors, rounding
//! - [`stats_parse`]: line parser
//! - [`stats_moments`]: mean, median, mode, variance, standard deviation
//! - [`stats_report`]: report formatting and the file driver
//!
//! # Example
//!
//! ```rust
//! use descriptive_stats::prelude::*;
//!
//! let samples = parse_str("1\n2\nabc\n3\n");
//! let result = StatisticsResult::from_samples(&samples, &StatsConfig::default()).unwrap();
//! let report = Report::new(result, samples.errors().to_vec()).unwrap();
//!
//! assert_eq!(report.diagnostics(), vec!["Invalid data at line 3: 'abc'"]);
//! assert!(report.render().starts_with("Mean: 2.0\nMedian: 2.0\n"));
//! ```

pub use stats_core;
pub use stats_moments;
pub use stats_parse;
pub use stats_report;

pub use stats_core::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use stats_core::{
        Error, NumericSample, ParseError, ParseErrorKind, Result, RoundingMode, SampleSet,
        StatsConfig,
    };
    pub use stats_moments::{newton_sqrt, StatisticsResult, NEWTON_ITERATIONS};
    pub use stats_parse::{parse_lines, parse_reader, parse_str};
    pub use stats_report::{OutputFormat, Pipeline, Report, RunConfig};
}
