use serde::{Deserialize, Serialize};

use super::status::UsageStatus;

/// Usage thresholds applied to each collected sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Memory usage percentage above which the sample is flagged
    pub memory_percent: f64,
    /// Disk usage percentage above which the sample is flagged
    pub disk_percent: f64,
}

impl ThresholdSet {
    /// Status of a memory reading; `None` means the metric could not be read.
    #[must_use]
    pub fn memory_status(&self, usage: Option<f64>) -> UsageStatus {
        UsageStatus::evaluate(usage, self.memory_percent)
    }

    /// Status of a disk reading; `None` means the metric could not be read.
    #[must_use]
    pub fn disk_status(&self, usage: Option<f64>) -> UsageStatus {
        UsageStatus::evaluate(usage, self.disk_percent)
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            memory_percent: 80.0,
            disk_percent: 80.0,
        }
    }
}
