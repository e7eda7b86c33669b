//! @ai:module:intent Report generation for algorithm comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, ChartGenerator, JsonReporter

pub mod charts;
pub mod json_report;
pub mod summary;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use summary::{mean_extremes, print_mean_summary, print_percentile_summary, MeanExtremes};

use crate::metrics::{AlgorithmResults, ReportMode};
use anyhow::Result;
use std::path::Path;

/// Fixed chart output filename, always overwritten
pub const CHART_FILE: &str = "algorithm_comparison.png";
/// Machine-readable companion to the chart
pub const JSON_FILE: &str = "algorithm_comparison.json";

/// @ai:intent Combined report generator: chart, JSON dump, console summary
pub struct ReportGenerator {
    charts: ChartGenerator,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            charts: ChartGenerator::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Generate all report outputs into a directory
    /// @ai:effects fs:write, io
    ///
    /// Results are ordered by algorithm name ascending before rendering so
    /// chart, JSON, and console table agree on display order.
    pub fn generate_all(
        &self,
        results: &[AlgorithmResults],
        mode: ReportMode,
        output_dir: &Path,
    ) -> Result<()> {
        let mut sorted = results.to_vec();
        sorted.sort_by(|a, b| a.algorithm.cmp(&b.algorithm));

        let chart_path = output_dir.join(CHART_FILE);
        self.charts.generate(&sorted, mode, &chart_path)?;
        tracing::info!("Comparison plot saved as: {}", chart_path.display());

        let json_path = output_dir.join(JSON_FILE);
        self.json.generate(&sorted, mode, &json_path)?;
        tracing::info!("Statistics saved as: {}", json_path.display());

        match mode {
            ReportMode::Mean => print_mean_summary(&sorted),
            ReportMode::Percentiles => print_percentile_summary(&sorted),
        }

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SummaryStats;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn results(algorithm: &str, mean: f64) -> AlgorithmResults {
        AlgorithmResults {
            algorithm: algorithm.to_string(),
            file: PathBuf::from(format!("{}_results_1.csv", algorithm.to_lowercase())),
            sample_count: 5,
            all: Some(SummaryStats {
                count: 5,
                mean,
                median: mean,
                p90: mean * 1.5,
                p99: mean * 2.0,
            }),
            short: None,
            long: None,
        }
    }

    #[test]
    fn test_generate_all_writes_chart_and_json() {
        let generator = ReportGenerator::new();
        let temp = TempDir::new().unwrap();

        let input = vec![results("SJF", 15.0), results("FIFO", 25.0)];
        generator
            .generate_all(&input, ReportMode::Mean, temp.path())
            .unwrap();

        assert!(temp.path().join(CHART_FILE).exists());
        assert!(temp.path().join(JSON_FILE).exists());
    }

    #[test]
    fn test_generate_all_orders_by_algorithm_name() {
        let generator = ReportGenerator::new();
        let temp = TempDir::new().unwrap();

        let input = vec![results("SJF", 15.0), results("FIFO", 25.0)];
        generator
            .generate_all(&input, ReportMode::Percentiles, temp.path())
            .unwrap();

        let content = std::fs::read_to_string(temp.path().join(JSON_FILE)).unwrap();
        let fifo = content.find("FIFO").unwrap();
        let sjf = content.find("SJF").unwrap();
        assert!(fifo < sjf);
    }
}
