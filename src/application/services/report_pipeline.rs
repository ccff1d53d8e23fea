use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::host_record::{HostRecord, INDEX_PAGE, is_report_page};
use crate::domain::parsing::log_parser::parse_log;
use crate::domain::ports::renderer::ReportRenderer;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no log files found in {}", .0.display())]
    NoLogs(PathBuf),
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WritePage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A log file left out of the report, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub records: Vec<HostRecord>,
    pub skipped: Vec<SkippedFile>,
    pub written: Vec<PathBuf>,
    pub index_path: PathBuf,
}

/// Scan → parse → render → write, over one log directory.
pub struct ReportPipeline<'a> {
    renderer: &'a dyn ReportRenderer,
    extensions: &'a [String],
}

impl<'a> ReportPipeline<'a> {
    #[must_use]
    pub fn new(renderer: &'a dyn ReportRenderer, extensions: &'a [String]) -> Self {
        Self {
            renderer,
            extensions,
        }
    }

    /// Log files in `dir` whose names end with a configured extension, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ReadDir` if the directory cannot be listed.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ReportError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter(|entry| {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
            })
            .map(|entry| entry.path())
            .collect();
        files.sort();
        Ok(files)
    }

    /// Regenerate `index.html` and every `device_<ip>.html` in `dir`.
    ///
    /// Files that cannot be read or parsed are skipped and reported in the
    /// outcome. Old pages are removed first so stale hosts do not linger.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoLogs` if the directory holds no log files,
    /// `ReportError::ReadDir` if it cannot be listed, or
    /// `ReportError::WritePage` if a page cannot be written.
    pub fn generate(&self, dir: &Path, date: NaiveDate) -> Result<ReportOutcome, ReportError> {
        let files = self.discover(dir)?;
        if files.is_empty() {
            return Err(ReportError::NoLogs(dir.to_path_buf()));
        }

        let mut records = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();
        for path in &files {
            let file = file_name(path);
            match load_record(path, &file) {
                Ok(record) => {
                    tracing::debug!(
                        file = %file,
                        ip = %record.ip,
                        sections = record.sections.len(),
                        "Parsed log"
                    );
                    records.push(record);
                }
                Err(reason) => {
                    tracing::warn!("Skipping {file}: {reason}");
                    skipped.push(SkippedFile { file, reason });
                }
            }
        }

        remove_pages(dir);

        let index_path = dir.join(INDEX_PAGE);
        write_page(&index_path, &self.renderer.index_page(&records, date))?;
        let mut written = vec![index_path.clone()];

        for record in &records {
            let path = dir.join(record.detail_page_name());
            if written.contains(&path) {
                tracing::warn!(
                    ip = %record.ip,
                    "Several logs share one IP; {} keeps the last one",
                    path.display()
                );
            }
            write_page(&path, &self.renderer.detail_page(record, date))?;
            if !written.contains(&path) {
                written.push(path);
            }
        }

        tracing::info!(
            hosts = records.len(),
            skipped = skipped.len(),
            "Report written to {}",
            dir.display()
        );

        Ok(ReportOutcome {
            records,
            skipped,
            written,
            index_path,
        })
    }
}

/// True when `dir` already holds a generated overview page.
#[must_use]
pub fn has_report(dir: &Path) -> bool {
    dir.join(INDEX_PAGE).is_file()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn load_record(path: &Path, file: &str) -> Result<HostRecord, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("read failed: {e}"))?;
    let content = String::from_utf8(bytes).map_err(|_| "not valid UTF-8".to_string())?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    parse_log(file, content).map_err(|e| e.to_string())
}

/// Removes pages from earlier runs. Failures are logged and ignored.
fn remove_pages(dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list {} for cleanup: {e}", dir.display());
            return;
        }
    };
    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        if !is_report_page(&name.to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        if let Err(e) = std::fs::remove_file(&path) {
            tracing::warn!("Failed to remove {}: {e}", path.display());
        }
    }
}

fn write_page(path: &Path, html: &str) -> Result<(), ReportError> {
    std::fs::write(path, html).map_err(|source| ReportError::WritePage {
        path: path.to_path_buf(),
        source,
    })
}
