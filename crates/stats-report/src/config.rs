//! Configuration for a pipeline run

use std::path::PathBuf;

use stats_core::StatsConfig;

/// File the report is written to when no other path is given
pub const DEFAULT_OUTPUT_PATH: &str = "StatisticsResults.txt";

/// Console rendering of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The same six-line block that is written to the output file
    #[default]
    Text,
    /// Result and diagnostics as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Settings for one run of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Output file, overwritten on every successful run
    pub output_path: PathBuf,
    /// Rounding applied to every statistic
    pub stats: StatsConfig,
    /// Whether [`crate::Pipeline::execute`] writes the output file
    pub write_output: bool,
    /// Console format
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            stats: StatsConfig::default(),
            write_output: true,
            format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_stats(mut self, stats: StatsConfig) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Compute and report without touching the output file
    pub fn without_output(mut self) -> Self {
        self.write_output = false;
        self
    }
}
