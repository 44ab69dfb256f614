//! The full set of reported statistics for one run

use serde::Serialize;
use stats_core::{Result, SampleSet, StatsConfig};
use tracing::{debug, instrument};

use crate::aggregate::{mean, median, modes, variance};
use crate::deviation::standard_deviation;

/// Descriptive statistics of a sample
///
/// Built once by [`StatisticsResult::compute`]; every statistic is derived from
/// the same slice, so `sample_count` describes all of them. The elapsed time is
/// filled in by whoever measures the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsResult {
    pub mean: f64,
    pub median: f64,
    /// Most frequent values in order of first appearance
    pub modes: Vec<f64>,
    pub variance: f64,
    pub standard_deviation: f64,
    pub sample_count: usize,
    pub elapsed_seconds: f64,
}

impl StatisticsResult {
    /// Compute every statistic over `values`
    ///
    /// Fails with [`stats_core::Error::InsufficientData`] on an empty slice.
    #[instrument(skip(values, config), fields(n = values.len()))]
    pub fn compute(values: &[f64], config: &StatsConfig) -> Result<Self> {
        let mean = mean(values, config)?;
        let median = median(values, config)?;
        let modes = modes(values, config)?;
        let variance = variance(values, mean, config)?;
        let standard_deviation = standard_deviation(variance, config)?;

        debug!(mean, median, variance, standard_deviation, modes = modes.len(), "statistics computed");

        Ok(Self {
            mean,
            median,
            modes,
            variance,
            standard_deviation,
            sample_count: values.len(),
            elapsed_seconds: 0.0,
        })
    }

    /// Compute over the valid samples of a parsed set
    pub fn from_samples(samples: &SampleSet, config: &StatsConfig) -> Result<Self> {
        Self::compute(&samples.values(), config)
    }

    /// Attach the measured wall-clock time
    pub fn with_elapsed(mut self, elapsed_seconds: f64) -> Self {
        self.elapsed_seconds = elapsed_seconds;
        self
    }
}
