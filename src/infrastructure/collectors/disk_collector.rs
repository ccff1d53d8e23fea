use std::path::Path;

use sysinfo::Disks;

use super::sysinfo_collector::safe_percent;

/// Reads mount usage using the `sysinfo` crate.
///
/// The disk list is rebuilt on each read to pick up newly mounted volumes.
pub struct DiskCollector;

impl DiskCollector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Used share of the filesystem mounted exactly at `mount`, as `(total - available) / total`.
    ///
    /// Returns `None` if nothing is mounted there or the filesystem reports zero size.
    #[must_use]
    pub fn mount_usage(&self, mount: &Path) -> Option<f64> {
        let disks = Disks::new_with_refreshed_list();
        let disk = disks.iter().find(|d| d.mount_point() == mount)?;
        let total = disk.total_space();
        if total == 0 {
            return None;
        }
        let used = total.saturating_sub(disk.available_space());
        Some(safe_percent(used, total).clamp(0.0, 100.0))
    }
}

impl Default for DiskCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mount_has_no_usage() {
        let collector = DiskCollector::new();
        assert!(
            collector
                .mount_usage(Path::new("/definitely/not/a/mount/point"))
                .is_none()
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn root_usage_is_a_percentage_when_present() {
        let collector = DiskCollector::new();
        if let Some(usage) = collector.mount_usage(Path::new("/")) {
            assert!((0.0..=100.0).contains(&usage));
        }
    }
}
