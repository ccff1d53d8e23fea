use chrono::{Local, NaiveDateTime};

use crate::domain::entities::health_sample::{
    HealthSample, ResourceUsage, ServiceCheck, UNKNOWN, format_uptime,
};
use crate::domain::entities::host_metrics::HostMetrics;
use crate::domain::ports::collector::HostCollector;
use crate::domain::ports::service_probe::ServiceProbe;
use crate::domain::ports::store::SampleStore;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Orchestrates one health sample: collect → probe services → evaluate → append.
pub struct HealthSampler<'a> {
    collector: &'a dyn HostCollector,
    probe: &'a dyn ServiceProbe,
    store: &'a dyn SampleStore,
    thresholds: &'a ThresholdSet,
    services: &'a [String],
}

impl<'a> HealthSampler<'a> {
    #[must_use]
    pub fn new(
        collector: &'a dyn HostCollector,
        probe: &'a dyn ServiceProbe,
        store: &'a dyn SampleStore,
        thresholds: &'a ThresholdSet,
        services: &'a [String],
    ) -> Self {
        Self {
            collector,
            probe,
            store,
            thresholds,
            services,
        }
    }

    /// Take a sample stamped with the current local time and append it to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cannot be written. Metric and probe
    /// failures never fail the run; they degrade to placeholder values.
    pub fn run_once(&self) -> anyhow::Result<HealthSample> {
        let sample = self.sample_at(Local::now().naive_local());
        self.store.append(&sample)?;
        tracing::info!(
            hostname = %sample.hostname,
            services = sample.services.len(),
            "Sample recorded"
        );
        Ok(sample)
    }

    /// Build a sample without persisting it.
    #[must_use]
    pub fn sample_at(&self, checked_at: NaiveDateTime) -> HealthSample {
        let metrics = self.collector.collect().unwrap_or_else(|e| {
            tracing::warn!("Host metrics unavailable: {e}");
            HostMetrics::default()
        });

        let services = self
            .services
            .iter()
            .map(|name| {
                self.probe.probe(name).unwrap_or_else(|e| {
                    tracing::warn!("Service probe failed for {name}: {e}");
                    ServiceCheck::unknown(name)
                })
            })
            .collect();

        HealthSample {
            checked_at,
            hostname: metrics.hostname.unwrap_or_else(|| UNKNOWN.to_string()),
            os_version: metrics.os_version.unwrap_or_else(|| UNKNOWN.to_string()),
            memory: ResourceUsage {
                percent: metrics.memory_percent,
                status: self.thresholds.memory_status(metrics.memory_percent),
            },
            disk: ResourceUsage {
                percent: metrics.disk_percent,
                status: self.thresholds.disk_status(metrics.disk_percent),
            },
            uptime: metrics
                .uptime_secs
                .map_or_else(|| UNKNOWN.to_string(), format_uptime),
            services,
        }
    }
}
