//! Reporting and end-to-end driver for descriptive statistics
//!
//! [`Pipeline`] reads a file of one number per line, collects per-line
//! diagnostics, computes the statistics over the valid lines and produces a
//! [`Report`]. Writing the report to disk is a separate step so callers can
//! print it first.
//!
//! # Example
//!
//! ```rust,no_run
//! use stats_report::{Pipeline, RunConfig};
//!
//! let pipeline = Pipeline::new(RunConfig::default());
//! let report = pipeline.run("data.txt").unwrap();
//! for line in report.diagnostics() {
//!     println!("{line}");
//! }
//! print!("{}", report.render());
//! pipeline.write(&report).unwrap();
//! ```

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::{OutputFormat, RunConfig, DEFAULT_OUTPUT_PATH};
pub use pipeline::Pipeline;
pub use report::{format_value, Report, NO_MODE};
