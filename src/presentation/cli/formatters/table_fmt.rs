use crate::domain::entities::health_sample::ServiceCheck;
use crate::domain::entities::host_record::HostRecord;
use colored::Colorize;

/// Formats probed services as an aligned table.
///
/// # Returns
///
/// A multi-line string with header, separator, and one row per service.
#[must_use]
pub fn format_service_table(services: &[ServiceCheck]) -> String {
    let header = format!("{:<28} {:<10} {:<20} {:<6}", "SERVICE", "STATE", "RUNNING", "ALERT");
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];
    for service in services {
        let name: String = service.name.chars().take(27).collect();
        let row = format!(
            "{:<28} {:<10} {:<20} {:<6}",
            name,
            service.state.to_string(),
            service.running_time,
            service.alert_status().to_string()
        );
        if service.state.is_active() {
            rows.push(row);
        } else {
            rows.push(row.red().to_string());
        }
    }

    rows.join("\n")
}

/// Formats parsed hosts with their alarm count.
#[must_use]
pub fn format_host_table(records: &[HostRecord]) -> String {
    let header = format!("{:<16} {:<24} {:<20} {:>6}", "IP", "HOSTNAME", "CHECKED", "ALARMS");
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];
    for record in records {
        let alarms = record.alarm_sections();
        let alarmed = record
            .sections
            .iter()
            .filter(|s| s.is_alarmed(&alarms))
            .count();
        let hostname: String = record.hostname.chars().take(23).collect();
        let row = format!(
            "{:<16} {:<24} {:<20} {:>6}",
            record.ip, hostname, record.check_time, alarmed
        );
        if record.has_alerts() {
            rows.push(row.red().to_string());
        } else {
            rows.push(row);
        }
    }

    rows.join("\n")
}
