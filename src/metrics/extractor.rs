//! @ai:module:intent CSV loading and per-file statistic computation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MetricExtractor
//! @ai:module:stateless true

use crate::error::{ReportError, Result};
use crate::input::ResolvedInput;
use crate::metrics::stats;
use crate::metrics::types::{AlgorithmResults, SummaryStats, TaskRecord};
use std::path::Path;

const RESPONSE_TIME_COLUMN: &str = "response_time_ms";

/// @ai:intent Trait for extracting statistics from result files
pub trait MetricExtractorTrait: Send + Sync {
    /// @ai:intent Load a resolved CSV file and compute its statistics
    fn extract(&self, input: &ResolvedInput) -> Result<AlgorithmResults>;
}

/// @ai:intent Loads simulator CSV exports and computes summary statistics
pub struct MetricExtractor;

impl MetricExtractor {
    /// @ai:intent Create a new metric extractor
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Read all task records from a CSV file
    /// @ai:effects fs:read
    ///
    /// A header without `response_time_ms` or an unparseable numeric cell is
    /// fatal for the run; there is no partial-result path for malformed data.
    fn load_records(path: &Path) -> Result<Vec<TaskRecord>> {
        let csv_err = |source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;

        let headers = reader.headers().map_err(csv_err)?;

        if !headers.iter().any(|h| h == RESPONSE_TIME_COLUMN) {
            return Err(ReportError::MissingColumn {
                path: path.to_path_buf(),
                column: RESPONSE_TIME_COLUMN.to_string(),
            });
        }

        reader
            .deserialize()
            .collect::<std::result::Result<Vec<TaskRecord>, csv::Error>>()
            .map_err(csv_err)
    }
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricExtractorTrait for MetricExtractor {
    /// @ai:intent Load a resolved CSV file and compute its statistics
    /// @ai:effects fs:read
    fn extract(&self, input: &ResolvedInput) -> Result<AlgorithmResults> {
        let records = Self::load_records(&input.path)?;

        let response_times: Vec<f64> = records.iter().map(|r| r.response_time_ms).collect();
        let classes = stats::split_by_duration(&records);

        Ok(AlgorithmResults {
            algorithm: input.algorithm.clone(),
            file: input.path.clone(),
            sample_count: records.len(),
            all: SummaryStats::from_samples(&response_times),
            short: SummaryStats::from_samples(&classes.short),
            long: classes
                .long
                .as_deref()
                .and_then(SummaryStats::from_samples),
        })
    }
}
