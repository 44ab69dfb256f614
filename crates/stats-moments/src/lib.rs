//! Descriptive statistics over a validated sample
//!
//! This crate computes the reported statistics of a run:
//!
//! | Statistic | Definition |
//! |-----------|------------|
//! | Mean | sum / n |
//! | Median | central element of a sorted copy, or mean of the two central elements |
//! | Mode | every value with the highest count, first-appearance order |
//! | Variance | population variance around the reported mean (divides by n) |
//! | Standard deviation | 20-step Newton-Raphson root of the reported variance |
//!
//! Every value is rounded per [`stats_core::StatsConfig`] (2 decimals,
//! half-to-even by default).
//!
//! # Example
//!
//! ```rust
//! use stats_core::StatsConfig;
//! use stats_moments::StatisticsResult;
//!
//! let result = StatisticsResult::compute(&[1.0, 2.0, 3.0, 4.0, 5.0], &StatsConfig::default()).unwrap();
//! assert_eq!(result.mean, 3.0);
//! assert_eq!(result.variance, 2.0);
//! assert_eq!(result.standard_deviation, 1.41);
//! ```

pub mod aggregate;
pub mod deviation;
pub mod result;

pub use aggregate::{mean, median, modes, variance};
pub use deviation::{newton_sqrt, standard_deviation, NEWTON_ITERATIONS};
pub use result::StatisticsResult;
