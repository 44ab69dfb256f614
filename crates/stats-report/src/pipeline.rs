//! File-to-report driver
//!
//! A run is a straight line: read, parse, check for data, compute, report.
//! The only fork is the empty-sample short-circuit, which stops the run
//! before any statistic is computed and before any output is written.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use stats_core::{Error, Result};
use stats_moments::StatisticsResult;
use stats_parse::parse_reader;
use tracing::{info, instrument, warn};

use crate::config::RunConfig;
use crate::report::Report;

/// Runs the statistics pipeline under one configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Read `input` and build its report without writing anything
    ///
    /// The elapsed time covers reading, parsing and computing.
    ///
    /// # Errors
    ///
    /// - [`Error::FileAccess`] if the file cannot be opened or read
    /// - [`Error::EmptyDataset`] if no line holds a valid number; the rejected
    ///   lines are carried in the error
    #[instrument(skip(self, input), fields(input = %input.as_ref().display()))]
    pub fn run(&self, input: impl AsRef<Path>) -> Result<Report> {
        let path = input.as_ref();
        let start = Instant::now();

        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let samples = parse_reader(BufReader::new(file)).map_err(|err| match err {
            Error::Io(source) => Error::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        for error in samples.errors() {
            warn!(line = error.line_number(), text = error.raw_text(), "skipping invalid line");
        }

        if samples.is_empty() {
            let (_, rejected) = samples.into_parts();
            info!(rejected = rejected.len(), "no valid data");
            return Err(Error::EmptyDataset { rejected });
        }

        let result = StatisticsResult::from_samples(&samples, &self.config.stats)?;
        let elapsed = start.elapsed().as_secs_f64();
        let result = result.with_elapsed(elapsed);

        info!(
            samples = result.sample_count,
            rejected = samples.errors().len(),
            elapsed,
            "statistics complete"
        );

        let (_, errors) = samples.into_parts();
        Report::new(result, errors)
    }

    /// Overwrite the configured output file with the report block
    pub fn write(&self, report: &Report) -> Result<()> {
        fs::write(&self.config.output_path, report.render())?;
        info!(path = %self.config.output_path.display(), "report written");
        Ok(())
    }

    /// [`run`](Self::run), then [`write`](Self::write) if the configuration asks for it
    pub fn execute(&self, input: impl AsRef<Path>) -> Result<Report> {
        let report = self.run(input)?;
        if self.config.write_output {
            self.write(&report)?;
        }
        Ok(report)
    }
}
