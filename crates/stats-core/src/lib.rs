//! Core types for descriptive statistics over numeric text files
//!
//! This crate holds what every stage of the pipeline shares:
//!
//! - [`SampleSet`]: parsed values plus the log of rejected lines
//! - [`Error`]/[`Result`]: the fatal error taxonomy
//! - [`StatsConfig`]: decimal precision and tie-breaking for reported values
//!
//! # Example
//!
//! ```rust
//! use stats_core::{NumericSample, SampleSet, StatsConfig};
//!
//! let mut set = SampleSet::new();
//! set.push_sample(NumericSample::new(1.236, 1));
//!
//! let config = StatsConfig::default();
//! assert_eq!(config.round(set.values()[0]), 1.24);
//! ```

pub mod config;
pub mod error;
pub mod rounding;
pub mod sample;

pub use config::{StatsConfig, DEFAULT_DECIMALS};
pub use error::{Error, Result};
pub use rounding::{round_to, RoundingMode};
pub use sample::{NumericSample, ParseError, ParseErrorKind, SampleSet};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
