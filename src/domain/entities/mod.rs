pub mod health_sample;
pub mod host_metrics;
pub mod host_record;
pub mod summary;

pub use health_sample::{HealthSample, ResourceUsage, ServiceCheck};
pub use host_metrics::HostMetrics;
pub use host_record::{BODY_ALERT_TAG, HostRecord, INDEX_PAGE, Section, is_report_page};
pub use summary::SummaryEntry;
