//! @ai:module:intent Scheduling-results reporting library
//! @ai:module:layer application
//! @ai:module:public_api error, input, metrics, report

pub mod error;
pub mod input;
pub mod metrics;
pub mod report;

pub use error::{ReportError, Result};
pub use input::{InputResolver, ResolvedInput};
pub use metrics::{AlgorithmResults, MetricExtractor, ReportMode, SummaryStats, TaskRecord};
pub use report::ReportGenerator;
