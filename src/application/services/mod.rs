pub mod report_pipeline;
pub mod sampler;

pub use report_pipeline::{ReportError, ReportOutcome, ReportPipeline, SkippedFile, has_report};
pub use sampler::HealthSampler;
