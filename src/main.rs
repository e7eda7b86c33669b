//! @ai:module:intent CLI for scheduling-results comparison reports
//! @ai:module:layer presentation

use anyhow::Result;
use clap::Parser;
use sched_report::{
    input::{InputResolver, InputResolverTrait},
    metrics::{MetricExtractor, MetricExtractorTrait, ReportMode},
    report::ReportGenerator,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sched-report")]
#[command(about = "Response-time comparison reports for queue-scheduling simulation results")]
#[command(version)]
struct Cli {
    /// CSV result files following the pattern '<algo>_results_<timestamp>.csv'
    files: Vec<PathBuf>,

    /// Report median/p90/p99 per task-size class instead of the mean
    #[arg(long)]
    percentiles: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Exit code 1 with usage on an empty invocation, not clap's code 2: the
    // path list is optional at the clap layer and validated here instead.
    if cli.files.is_empty() {
        eprintln!("Usage: sched-report [--percentiles] <csv_file>...");
        eprintln!("Example: sched-report results/fifo_results_*.csv results/sjf_results_*.csv");
        eprintln!();
        eprintln!("Note: files should follow the pattern '<algo>_results_<timestamp>.csv'");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sched_report=info".parse()?),
        )
        .init();

    let mode = if cli.percentiles {
        ReportMode::Percentiles
    } else {
        ReportMode::Mean
    };

    tracing::info!("Loading data from {} CSV file(s)...", cli.files.len());

    let resolver = InputResolver::new();
    let inputs = resolver.resolve(&cli.files)?;

    let extractor = MetricExtractor::new();
    let mut results = Vec::with_capacity(inputs.len());

    for input in &inputs {
        let extracted = extractor.extract(input)?;

        match &extracted.all {
            Some(stats) => tracing::info!(
                "Loaded {}: {} - Avg Response Time: {:.2} ms ({} rows)",
                input.path.display(),
                extracted.algorithm,
                stats.mean,
                extracted.sample_count
            ),
            None => tracing::warn!(
                "Loaded {}: {} - no rows",
                input.path.display(),
                extracted.algorithm
            ),
        }

        results.push(extracted);
    }

    let reporter = ReportGenerator::new();
    reporter.generate_all(&results, mode, Path::new("."))?;

    Ok(())
}
