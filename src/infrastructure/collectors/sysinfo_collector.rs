use std::path::PathBuf;
use std::sync::Mutex;

use sysinfo::System;

use super::disk_collector::DiskCollector;
use crate::domain::entities::host_metrics::HostMetrics;
use crate::domain::ports::collector::{CollectionError, HostCollector};

/// Release file checked before falling back to the generic OS name.
const RELEASE_FILE: &str = "/etc/redhat-release";

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        (numerator as f64 / denominator as f64) * 100.0
    } else {
        0.0
    }
}

/// Collects host metrics using the `sysinfo` crate.
///
/// Uses `Mutex<System>` for interior mutability since the `HostCollector`
/// trait requires `&self` but `sysinfo::System` needs `&mut self` for refresh.
pub struct SysinfoCollector {
    sys: Mutex<System>,
    disk_collector: DiskCollector,
    disk_mount: PathBuf,
    release_file: PathBuf,
}

impl SysinfoCollector {
    /// Creates a collector reporting disk usage for `disk_mount`.
    #[must_use]
    pub fn new(disk_mount: impl Into<PathBuf>) -> Self {
        Self {
            sys: Mutex::new(System::new()),
            disk_collector: DiskCollector::new(),
            disk_mount: disk_mount.into(),
            release_file: PathBuf::from(RELEASE_FILE),
        }
    }

    /// Reads the distribution name from `path` instead of the system release file.
    #[must_use]
    pub fn with_release_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.release_file = path.into();
        self
    }

    fn os_version(&self) -> Option<String> {
        std::fs::read_to_string(&self.release_file)
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|version| !version.is_empty())
            .or_else(System::long_os_version)
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HostCollector for SysinfoCollector {
    fn collect(&self) -> Result<HostMetrics, CollectionError> {
        let mut sys = self.sys.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}"))
        })?;
        sys.refresh_memory();
        let memory_percent = memory_percent(sys.total_memory(), sys.available_memory());
        drop(sys);

        let disk_percent = self.disk_collector.mount_usage(&self.disk_mount);
        if disk_percent.is_none() {
            tracing::warn!("No disk usage for mount {}", self.disk_mount.display());
        }

        Ok(HostMetrics {
            hostname: System::host_name(),
            os_version: self.os_version(),
            memory_percent,
            disk_percent,
            uptime_secs: Some(System::uptime()),
        })
    }
}

/// Used memory share, counting reclaimable cache as free.
fn memory_percent(total: u64, available: u64) -> Option<f64> {
    (total > 0).then(|| safe_percent(total.saturating_sub(available), total))
}
