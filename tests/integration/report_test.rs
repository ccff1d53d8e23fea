#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hostcheck::application::services::report_pipeline::{ReportError, ReportPipeline, has_report};
use hostcheck::presentation::html::HtmlRenderer;

const RED: &str = "color: #FF4444;";
const GREEN: &str = "color: #4CAF50;";

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/logs")
}

/// Copies the fixture logs into a scratch directory so pages are written there.
fn scratch_logs() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for entry in std::fs::read_dir(fixtures()).expect("fixtures dir") {
        let entry = entry.expect("entry");
        std::fs::copy(entry.path(), dir.path().join(entry.file_name())).expect("copy fixture");
    }
    dir
}

fn extensions() -> Vec<String> {
    vec![".log".to_string(), ".log.txt".to_string()]
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).expect("read page")
}

#[test]
fn discovery_matches_both_extensions_and_ignores_other_files() {
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);
    let files = pipeline.discover(&fixtures()).expect("discover");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().expect("name").to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["10.0.0.1_check.log", "10.0.0.2_check.log.txt", "10.0.0.3_bad.log"]
    );
}

#[test]
fn malformed_log_is_skipped_and_others_render() {
    let dir = scratch_logs();
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);

    let outcome = pipeline.generate(dir.path(), date()).expect("generate");

    let ips: Vec<&str> = outcome.records.iter().map(|r| r.ip.as_str()).collect();
    assert_eq!(ips, ["10.0.0.1", "10.0.0.2"]);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].file, "10.0.0.3_bad.log");
    assert!(outcome.skipped[0].reason.contains("hostname"));

    assert!(has_report(dir.path()));
    assert!(dir.path().join("device_10.0.0.1.html").exists());
    assert!(dir.path().join("device_10.0.0.2.html").exists());
    assert!(!dir.path().join("device_10.0.0.3.html").exists());
    assert_eq!(outcome.written.len(), 3);
}

#[test]
fn alert_and_ok_entries_use_matching_colors_on_both_pages() {
    let dir = scratch_logs();
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);
    pipeline.generate(dir.path(), date()).expect("generate");

    let index = read(dir.path(), "index.html");
    assert!(index.contains(&format!("{RED}\">内存: 告警</a>")));
    assert!(index.contains(&format!("{GREEN}\">磁盘: OK</a>")));
    assert!(index.contains(&format!("{GREEN}\">磁盘: ok</a>")));

    let detail = read(dir.path(), "device_10.0.0.1.html");
    assert!(detail.contains(&format!("{RED}\">内存: 告警</a>")));
    assert!(detail.contains(&format!("{GREEN}\">磁盘: OK</a>")));
    assert!(detail.contains("主机名: dpi-node-01"));
    assert!(detail.contains(r#"<span class="alert-tag">[告警]</span>"#));
}

#[test]
fn service_section_is_reformatted_into_columns() {
    let dir = scratch_logs();
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);
    pipeline.generate(dir.path(), date()).expect("generate");

    let detail = read(dir.path(), "device_10.0.0.1.html");
    assert!(detail.contains(r#"<pre class="service-table">"#));
    assert!(detail.contains(&format!("{:<20} {:<10}", "updpi.service", "active")));
    assert!(!detail.contains("|--------|"));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = scratch_logs();
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);

    pipeline.generate(dir.path(), date()).expect("first run");
    let first_index = read(dir.path(), "index.html");
    let first_detail = read(dir.path(), "device_10.0.0.2.html");

    pipeline.generate(dir.path(), date()).expect("second run");
    assert_eq!(read(dir.path(), "index.html"), first_index);
    assert_eq!(read(dir.path(), "device_10.0.0.2.html"), first_detail);
}

#[test]
fn pages_for_removed_logs_disappear() {
    let dir = scratch_logs();
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);
    pipeline.generate(dir.path(), date()).expect("first run");

    std::fs::remove_file(dir.path().join("10.0.0.2_check.log.txt")).expect("remove log");
    pipeline.generate(dir.path(), date()).expect("second run");

    assert!(!dir.path().join("device_10.0.0.2.html").exists());
    assert!(!read(dir.path(), "index.html").contains("10.0.0.2"));
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn directory_without_logs_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("notes.txt"), "x").expect("write");
    let exts = extensions();
    let pipeline = ReportPipeline::new(&HtmlRenderer, &exts);

    let err = pipeline.generate(dir.path(), date()).expect_err("no logs");
    assert!(matches!(err, ReportError::NoLogs(_)));
    assert!(!has_report(dir.path()));
}
