use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use encoding_rs::GBK;

use crate::domain::entities::health_sample::HealthSample;
use crate::domain::ports::store::{SampleStore, StoreError};

const CHECK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FIXED_COLUMNS: [&str; 8] = [
    "检查时间",
    "主机名",
    "系统版本",
    "内存使用率",
    "内存状态",
    "磁盘使用率",
    "磁盘状态",
    "系统运行时间",
];

/// Appends samples to a GBK-encoded CSV file, one row per sample.
///
/// Every field is quoted and rows end with CRLF so the file opens cleanly in
/// spreadsheet tools on Chinese-locale Windows.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleStore for CsvStore {
    fn append(&self, sample: &HealthSample) -> Result<(), StoreError> {
        let write_header = !self.path.exists();
        let text = encode_rows(sample, write_header)?;

        let (bytes, _, had_errors) = GBK.encode(&text);
        if had_errors {
            return Err(StoreError::Encoding(format!(
                "row for {} as GBK",
                sample.hostname
            )));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", self.path.display())))?;
        file.write_all(&bytes)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(
            header = write_header,
            "Appended sample to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// Header names: the fixed host columns, then state/running time/alert per service.
#[must_use]
pub fn header_row(sample: &HealthSample) -> Vec<String> {
    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(ToString::to_string).collect();
    for service in &sample.services {
        header.push(format!("{}_状态", service.name));
        header.push(format!("{}_运行时间", service.name));
        header.push(format!("{}_告警", service.name));
    }
    header
}

#[must_use]
pub fn data_row(sample: &HealthSample) -> Vec<String> {
    let mut row = vec![
        sample.checked_at.format(CHECK_TIME_FORMAT).to_string(),
        sample.hostname.clone(),
        sample.os_version.clone(),
        sample.memory.percent_label(),
        sample.memory.status.to_string(),
        sample.disk.percent_label(),
        sample.disk.status.to_string(),
        sample.uptime.clone(),
    ];
    for service in &sample.services {
        row.push(service.state.to_string());
        row.push(service.running_time.clone());
        row.push(service.alert_status().to_string());
    }
    row
}

fn encode_rows(sample: &HealthSample, with_header: bool) -> Result<String, StoreError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    if with_header {
        writer
            .write_record(header_row(sample))
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
    }
    writer
        .write_record(data_row(sample))
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

    let buffer = writer
        .into_inner()
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| StoreError::Encoding(e.to_string()))
}

/// Writes a script next to the CSV that opens it in a spreadsheet.
///
/// A `.bat` path gets a Windows batch file; any other path gets a POSIX shell
/// script using `xdg-open`.
///
/// # Errors
///
/// Returns `StoreError::WriteFailed` if the script cannot be written.
pub fn write_launcher(launcher: &Path, csv: &Path) -> Result<(), StoreError> {
    let is_batch = launcher
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bat"));
    let content = if is_batch {
        batch_launcher(launcher, csv)
    } else {
        shell_launcher(launcher, csv)
    };

    std::fs::write(launcher, content)
        .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", launcher.display())))?;

    #[cfg(unix)]
    if !is_batch {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(launcher, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| StoreError::WriteFailed(format!("{}: {e}", launcher.display())))?;
    }

    Ok(())
}

/// CSV name relative to the launcher when they share a directory.
fn sibling_name(launcher: &Path, csv: &Path) -> Option<String> {
    let same_dir = launcher.parent().unwrap_or_else(|| Path::new(""))
        == csv.parent().unwrap_or_else(|| Path::new(""));
    if same_dir {
        csv.file_name().map(|n| n.to_string_lossy().into_owned())
    } else {
        None
    }
}

fn batch_launcher(launcher: &Path, csv: &Path) -> String {
    let target = sibling_name(launcher, csv)
        .map_or_else(|| csv.display().to_string(), |name| format!("%~dp0{name}"));
    format!("@echo off\r\nstart excel.exe \"{target}\"\r\n")
}

fn shell_launcher(launcher: &Path, csv: &Path) -> String {
    let target = sibling_name(launcher, csv).map_or_else(
        || csv.display().to_string(),
        |name| format!("$(dirname \"$0\")/{name}"),
    );
    format!("#!/bin/sh\nxdg-open \"{target}\"\n")
}
