use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use colored::Colorize;

use crate::application::services::report_pipeline::{ReportOutcome, ReportPipeline};
use crate::domain::ports::viewer::ReportViewer;
use crate::presentation::cli::formatters::status_fmt::{colorize_tone, print_section_header};
use crate::presentation::cli::formatters::table_fmt::format_host_table;

/// Generates the HTML report for `dir` and optionally opens the index page.
///
/// # Errors
///
/// Returns an error if generation fails, the viewer cannot be started, or
/// JSON serialization fails.
pub fn run_report(
    pipeline: &ReportPipeline<'_>,
    viewer: &dyn ReportViewer,
    dir: &Path,
    date: NaiveDate,
    open: bool,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = pipeline
        .generate(dir, date)
        .with_context(|| format!("Failed to generate report for {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    if open {
        viewer
            .open(&outcome.index_path)
            .with_context(|| format!("Failed to open {}", outcome.index_path.display()))?;
    }
    Ok(())
}

fn print_outcome(outcome: &ReportOutcome) {
    print_section_header(&format!("Report: {} host(s)", outcome.records.len()));
    println!("{}", format_host_table(&outcome.records));

    for record in &outcome.records {
        let entries = record.summary_entries();
        if entries.is_empty() {
            continue;
        }
        let line: Vec<String> = entries
            .iter()
            .map(|e| colorize_tone(&format!("{}: {}", e.label, e.status), e.tone()).to_string())
            .collect();
        println!("  {:<16} {}", record.ip, line.join("  "));
    }

    if !outcome.skipped.is_empty() {
        print_section_header("\nSkipped");
        for skipped in &outcome.skipped {
            println!("  {} {}", skipped.file.yellow(), skipped.reason);
        }
    }

    println!(
        "\n{} page(s) written. Index: {}",
        outcome.written.len(),
        outcome.index_path.display().to_string().bold()
    );
}
