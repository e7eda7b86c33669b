//! @ai:module:intent Record and statistic types for simulation results
//! @ai:module:layer domain
//! @ai:module:public_api TaskRecord, SummaryStats, AlgorithmResults, ReportMode
//! @ai:module:stateless true

use crate::metrics::stats;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Which statistic set a report computes and renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Arithmetic mean of response times per algorithm
    Mean,
    /// Median / p90 / p99 per short/long task-size class
    Percentiles,
}

/// @ai:intent One row of a simulator result export
///
/// The export carries more columns (`task_id`, `arrival_time`, `dequeue_time`,
/// `completion_time`, `wait_time_ms`); only the two the reports consume are
/// deserialized, the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub response_time_ms: f64,
    #[serde(default)]
    pub duration_ms: Option<f64>,
}

/// @ai:intent Summary statistics over one response-time sample set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub p99: f64,
}

impl SummaryStats {
    /// @ai:intent Compute statistics over a sample; empty samples yield None
    /// @ai:effects pure
    ///
    /// Quantiles use linear interpolation between sorted ranks. Absent (None)
    /// is distinct from zero: an empty subset has no statistics, and zero is
    /// applied only as a presentation fallback at chart-drawing time.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(Self {
            count: sorted.len(),
            mean: stats::mean(&sorted),
            median: stats::percentile(&sorted, 50.0),
            p90: stats::percentile(&sorted, 90.0),
            p99: stats::percentile(&sorted, 99.0),
        })
    }
}

/// @ai:intent Computed results for one algorithm's result file
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResults {
    pub algorithm: String,
    pub file: PathBuf,
    pub sample_count: usize,
    /// Statistics over every row in the file
    pub all: Option<SummaryStats>,
    /// Rows with the minimum distinct `duration_ms`
    pub short: Option<SummaryStats>,
    /// Rows with the maximum distinct `duration_ms`; absent when the file has
    /// fewer than two distinct duration values
    pub long: Option<SummaryStats>,
}
