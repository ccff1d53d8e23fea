use thiserror::Error;

use crate::domain::entities::host_metrics::HostMetrics;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to collect host metrics: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub trait HostCollector {
    /// Read the current host metrics.
    ///
    /// Individual readings that fail are left as `None`; an error means
    /// nothing at all could be read.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if metrics are unavailable or permission is denied.
    fn collect(&self) -> Result<HostMetrics, CollectionError>;
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn collection_error_display() {
        let err = CollectionError::MetricsUnavailable("memory".to_string());
        assert_eq!(err.to_string(), "failed to collect host metrics: memory");
    }
}
