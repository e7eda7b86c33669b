//! @ai:module:intent Metric extraction and aggregation for result files
//! @ai:module:layer application
//! @ai:module:public_api TaskRecord, SummaryStats, AlgorithmResults, ReportMode, MetricExtractor

pub mod extractor;
pub mod stats;
pub mod types;

pub use extractor::{MetricExtractor, MetricExtractorTrait};
pub use types::{AlgorithmResults, ReportMode, SummaryStats, TaskRecord};
