#![allow(clippy::expect_used)]

use std::path::Path;

use encoding_rs::GBK;
use hostcheck::application::services::sampler::HealthSampler;
use hostcheck::domain::entities::health_sample::ServiceCheck;
use hostcheck::domain::entities::host_metrics::HostMetrics;
use hostcheck::domain::ports::collector::{CollectionError, HostCollector};
use hostcheck::domain::ports::service_probe::{ProbeError, ServiceProbe};
use hostcheck::domain::value_objects::status::ServiceState;
use hostcheck::domain::value_objects::thresholds::ThresholdSet;
use hostcheck::infrastructure::persistence::csv_store::{CsvStore, write_launcher};

struct FixedCollector;

impl HostCollector for FixedCollector {
    fn collect(&self) -> Result<HostMetrics, CollectionError> {
        Ok(HostMetrics {
            hostname: Some("dpi-node-01".to_string()),
            os_version: Some("CentOS Linux release 7.9.2009 (Core)".to_string()),
            memory_percent: Some(92.0),
            disk_percent: Some(41.5),
            uptime_secs: Some(90_061),
        })
    }
}

struct BrokenCollector;

impl HostCollector for BrokenCollector {
    fn collect(&self) -> Result<HostMetrics, CollectionError> {
        Err(CollectionError::MetricsUnavailable("no /proc".to_string()))
    }
}

struct ScriptedProbe;

impl ServiceProbe for ScriptedProbe {
    fn probe(&self, service: &str) -> Result<ServiceCheck, ProbeError> {
        match service {
            "upp.service" => Ok(ServiceCheck {
                name: service.to_string(),
                state: ServiceState::Active,
                running_time: "2 days, 3:04:05".to_string(),
            }),
            "upload.service" => Ok(ServiceCheck {
                name: service.to_string(),
                state: ServiceState::Inactive,
                running_time: "未运行".to_string(),
            }),
            _ => Err(ProbeError::Unavailable("systemctl missing".to_string())),
        }
    }
}

fn services() -> Vec<String> {
    ["upp.service", "upload.service", "logtar.service"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn decode(path: &Path) -> String {
    let bytes = std::fs::read(path).expect("read csv");
    let (text, _, had_errors) = GBK.decode(&bytes);
    assert!(!had_errors, "csv must be valid GBK");
    text.into_owned()
}

#[test]
fn two_runs_append_one_header_and_two_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("system_check_report.csv");
    let store = CsvStore::new(&csv);
    let thresholds = ThresholdSet::default();
    let services = services();
    let sampler = HealthSampler::new(&FixedCollector, &ScriptedProbe, &store, &thresholds, &services);

    sampler.run_once().expect("first run");
    sampler.run_once().expect("second run");

    let text = decode(&csv);
    let lines: Vec<&str> = text.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\"检查时间\",\"主机名\""));
    assert!(lines[0].contains("\"upp.service_状态\",\"upp.service_运行时间\",\"upp.service_告警\""));
    assert!(lines[1].contains("\"dpi-node-01\""));
    assert!(lines[1].contains("\"92.0%\",\"告警\",\"41.5%\",\"正常\""));
    assert!(lines[1].contains("\"01天01小时01分钟\""));
    assert!(lines[1].contains("\"active\",\"2 days, 3:04:05\",\"正常\""));
    assert!(lines[1].contains("\"inactive\",\"未运行\",\"告警\""));
    assert!(lines[1].contains("\"unknown\",\"未知\""));
}

#[test]
fn failed_collection_still_records_a_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("report.csv");
    let store = CsvStore::new(&csv);
    let thresholds = ThresholdSet::default();
    let services = Vec::new();
    let sampler = HealthSampler::new(&BrokenCollector, &ScriptedProbe, &store, &thresholds, &services);

    let sample = sampler.run_once().expect("run");
    assert_eq!(sample.hostname, "Unknown");

    let text = decode(&csv);
    assert!(text.contains("\"Unknown\",\"Unknown\",\"Unknown\",\"未知\""));
}

#[test]
fn launcher_points_at_sibling_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("system_check_report.csv");
    let bat = dir.path().join("open_report.bat");
    let sh = dir.path().join("open_report.sh");

    write_launcher(&bat, &csv).expect("bat");
    write_launcher(&sh, &csv).expect("sh");

    let bat_text = std::fs::read_to_string(&bat).expect("read bat");
    assert!(bat_text.contains("start excel.exe \"%~dp0system_check_report.csv\""));
    let sh_text = std::fs::read_to_string(&sh).expect("read sh");
    assert!(sh_text.starts_with("#!/bin/sh"));
    assert!(sh_text.contains("system_check_report.csv"));
}
