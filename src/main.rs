//! compute-statistics binary
//!
//! Reads a file with one number per line and reports mean, median, mode,
//! variance and standard deviation on the console and in an output file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use descriptive_stats::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "compute-statistics")]
#[command(
    version,
    about = "Compute mean, median, mode, variance and standard deviation of a numeric file"
)]
struct Args {
    /// File with one number per line
    input: PathBuf,

    /// Report file, overwritten on every run
    #[arg(short, long, default_value = stats_report::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Tie-breaking rule for rounding to two decimals
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfEven)]
    rounding: RoundingArg,

    /// Console format; the report file is always text
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoundingArg {
    HalfEven,
    HalfAway,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfEven => RoundingMode::HalfEven,
            RoundingArg::HalfAway => RoundingMode::HalfAwayFromZero,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // stdout carries the report only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        input = %args.input.display(),
        "compute-statistics v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = RunConfig::default()
        .with_output_path(args.output)
        .with_stats(StatsConfig::default().with_rounding(args.rounding.into()))
        .with_format(args.format.into());
    let pipeline = Pipeline::new(config);

    let report = match pipeline.run(&args.input) {
        Ok(report) => report,
        Err(err) if err.is_not_found() => {
            println!("Error: File '{}' not found.", args.input.display());
            return Ok(ExitCode::FAILURE);
        }
        Err(Error::FileAccess { path, source }) => {
            println!("Error: Cannot read file '{}': {source}", path.display());
            return Ok(ExitCode::FAILURE);
        }
        Err(Error::EmptyDataset { rejected }) => {
            for error in &rejected {
                println!("{error}");
            }
            println!("No valid data found in the file.");
            return Ok(ExitCode::FAILURE);
        }
        Err(other) => return Err(other.into()),
    };

    for line in report.diagnostics() {
        println!("{line}");
    }
    print!("{}", report.render_as(pipeline.config().format)?);
    if pipeline.config().format == OutputFormat::Json {
        println!();
    }

    pipeline.write(&report)?;
    Ok(ExitCode::SUCCESS)
}
