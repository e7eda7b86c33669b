//! @ai:module:intent Machine-readable JSON dump of computed statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::metrics::{AlgorithmResults, ReportMode};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write the computed statistics as pretty-printed JSON
    fn generate(
        &self,
        results: &[AlgorithmResults],
        mode: ReportMode,
        output_path: &Path,
    ) -> Result<()>;
}

/// @ai:intent Serialized report envelope
#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: String,
    mode: ReportMode,
    algorithms: &'a [AlgorithmResults],
}

/// @ai:intent Generates JSON reports from algorithm results
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Write the computed statistics as pretty-printed JSON
    /// @ai:effects fs:write
    fn generate(
        &self,
        results: &[AlgorithmResults],
        mode: ReportMode,
        output_path: &Path,
    ) -> Result<()> {
        let report = JsonReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            mode,
            algorithms: results,
        };

        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SummaryStats;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("algorithm_comparison.json");

        let results = vec![AlgorithmResults {
            algorithm: "FIFO".to_string(),
            file: PathBuf::from("fifo_results_1.csv"),
            sample_count: 3,
            all: Some(SummaryStats {
                count: 3,
                mean: 20.0,
                median: 20.0,
                p90: 28.0,
                p99: 29.8,
            }),
            short: None,
            long: None,
        }];

        reporter
            .generate(&results, ReportMode::Mean, &output)
            .unwrap();
        assert!(output.exists());

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("FIFO"));
        assert!(content.contains("\"mode\": \"mean\""));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["algorithms"][0]["all"]["mean"], 20.0);
    }
}
