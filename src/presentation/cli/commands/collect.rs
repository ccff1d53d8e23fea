use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::services::sampler::HealthSampler;
use crate::domain::entities::health_sample::HealthSample;
use crate::infrastructure::persistence::csv_store::write_launcher;
use crate::presentation::cli::formatters::status_fmt::{
    colorize_status, colorize_usage, print_section_header, progress_bar,
};
use crate::presentation::cli::formatters::table_fmt::format_service_table;

/// Takes one health sample, appends it to the CSV and refreshes the launcher script.
///
/// # Errors
///
/// Returns an error if the row or the launcher cannot be written, or JSON
/// serialization fails.
pub fn run_collect(
    sampler: &HealthSampler<'_>,
    csv: &Path,
    launcher: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let sample = sampler
        .run_once()
        .with_context(|| format!("Failed to append sample to {}", csv.display()))?;

    if let Some(launcher) = launcher {
        write_launcher(launcher, csv)
            .with_context(|| format!("Failed to write launcher {}", launcher.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&sample)?);
    } else {
        print_sample(&sample);
        println!("\nReport saved to: {}", csv.display().to_string().bold());
        if let Some(launcher) = launcher {
            println!("Open it with:    {}", launcher.display().to_string().bold());
        }
    }
    Ok(())
}

fn print_sample(sample: &HealthSample) {
    println!("{}", "hostcheck: host sample".bold().cyan());
    println!("{}", "━".repeat(50));
    println!("  Checked:  {}", sample.checked_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Host:     {}", sample.hostname);
    println!("  System:   {}", sample.os_version);
    println!("  Uptime:   {}", sample.uptime);

    print_section_header("\nMemory");
    println!(
        "  {} {} {}",
        progress_bar(&sample.memory, 30),
        colorize_usage(&sample.memory),
        colorize_status(sample.memory.status)
    );

    print_section_header("\nDisk");
    println!(
        "  {} {} {}",
        progress_bar(&sample.disk, 30),
        colorize_usage(&sample.disk),
        colorize_status(sample.disk.status)
    );

    if !sample.services.is_empty() {
        print_section_header("\nServices");
        println!("{}", format_service_table(&sample.services));
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::health_sample::ServiceCheck;
    use crate::domain::entities::host_metrics::HostMetrics;
    use crate::domain::ports::collector::{CollectionError, HostCollector};
    use crate::domain::ports::service_probe::{ProbeError, ServiceProbe};
    use crate::domain::value_objects::thresholds::ThresholdSet;
    use crate::infrastructure::persistence::csv_store::CsvStore;
    use colored::control;

    struct MockCollector;

    impl HostCollector for MockCollector {
        fn collect(&self) -> Result<HostMetrics, CollectionError> {
            Ok(HostMetrics {
                hostname: Some("node-a".to_string()),
                os_version: Some("Test OS".to_string()),
                memory_percent: Some(30.0),
                disk_percent: Some(95.0),
                uptime_secs: Some(3_600),
            })
        }
    }

    struct UnknownProbe;

    impl ServiceProbe for UnknownProbe {
        fn probe(&self, service: &str) -> Result<ServiceCheck, ProbeError> {
            Ok(ServiceCheck::unknown(service))
        }
    }

    #[test]
    fn collect_writes_csv_and_launcher() {
        control::set_override(false);
        let dir = tempfile::tempdir().expect("tempdir");
        let csv = dir.path().join("report.csv");
        let launcher = dir.path().join("open_report.bat");
        let store = CsvStore::new(&csv);
        let thresholds = ThresholdSet::default();
        let services = vec!["upp.service".to_string()];
        let sampler = HealthSampler::new(&MockCollector, &UnknownProbe, &store, &thresholds, &services);

        run_collect(&sampler, &csv, Some(&launcher), false).expect("collect");

        assert!(csv.exists());
        assert!(launcher.exists());
    }

    #[test]
    fn collect_without_launcher_json() {
        control::set_override(false);
        let dir = tempfile::tempdir().expect("tempdir");
        let csv = dir.path().join("report.csv");
        let store = CsvStore::new(&csv);
        let thresholds = ThresholdSet::default();
        let services = Vec::new();
        let sampler = HealthSampler::new(&MockCollector, &UnknownProbe, &store, &thresholds, &services);

        run_collect(&sampler, &csv, None, true).expect("collect");

        assert!(csv.exists());
        assert!(!dir.path().join("open_report.bat").exists());
    }
}
