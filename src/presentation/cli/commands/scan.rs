use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::services::report_pipeline::ReportPipeline;
use crate::presentation::cli::formatters::status_fmt::print_section_header;

/// Lists the log files report generation would pick up from `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn run_scan(pipeline: &ReportPipeline<'_>, dir: &Path) -> anyhow::Result<()> {
    let files = pipeline
        .discover(dir)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;

    print_section_header(&format!("Log files in {}", dir.display()));
    if files.is_empty() {
        println!("{}", "No log files found".yellow());
        return Ok(());
    }
    for file in &files {
        let name = file
            .file_name()
            .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned());
        println!("  {name}");
    }
    println!("{} file(s)", files.len());
    Ok(())
}
