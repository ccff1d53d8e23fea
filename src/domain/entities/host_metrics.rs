use serde::{Deserialize, Serialize};

/// Raw host readings before thresholds are applied
///
/// Each reading is optional so one unreadable metric does not discard the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostMetrics {
    pub hostname: Option<String>,
    pub os_version: Option<String>,
    pub memory_percent: Option<f64>,
    pub disk_percent: Option<f64>,
    pub uptime_secs: Option<u64>,
}
