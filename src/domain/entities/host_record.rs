use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::summary::SummaryEntry;
use crate::domain::value_objects::tone::Tone;

/// Tag inside a section body that flags a failed check.
pub const BODY_ALERT_TAG: &str = "[告警]";

/// File name of the report overview page.
pub const INDEX_PAGE: &str = "index.html";
/// Detail pages are named `device_<ip>.html`.
pub const DETAIL_PAGE_PREFIX: &str = "device_";
pub const PAGE_EXTENSION: &str = ".html";

/// True for file names this tool generates and may delete.
#[must_use]
pub fn is_report_page(file_name: &str) -> bool {
    file_name == INDEX_PAGE
        || (file_name.starts_with(DETAIL_PAGE_PREFIX) && file_name.ends_with(PAGE_EXTENSION))
}

/// Named block of diagnostic text from an inspection log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// Lines between this marker and the next, newline-joined
    pub body: String,
}

impl Section {
    #[must_use]
    pub fn has_alert_tag(&self) -> bool {
        self.body.contains(BODY_ALERT_TAG)
    }

    /// True when the summary flags the section or its body carries an alert tag.
    #[must_use]
    pub fn is_alarmed(&self, alarms: &BTreeSet<String>) -> bool {
        alarms.contains(&self.name) || self.has_alert_tag()
    }
}

/// Parsed inspection log of one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Taken from the log file name prefix
    pub ip: String,
    pub hostname: String,
    pub check_time: String,
    /// Sections in source order
    pub sections: Vec<Section>,
    /// Raw summary line, comma-separated `label: status` pairs
    pub summary: String,
}

impl HostRecord {
    #[must_use]
    pub fn detail_page_name(&self) -> String {
        format!("{DETAIL_PAGE_PREFIX}{}{PAGE_EXTENSION}", self.ip)
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    #[must_use]
    pub fn summary_entries(&self) -> Vec<SummaryEntry> {
        SummaryEntry::parse_all(&self.summary)
    }

    /// Sections named by summary entries whose status is an alert.
    #[must_use]
    pub fn alarm_sections(&self) -> BTreeSet<String> {
        self.summary_entries()
            .into_iter()
            .filter(|entry| entry.tone() == Tone::Alert)
            .map(|entry| entry.section)
            .collect()
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        let alarms = self.alarm_sections();
        !alarms.is_empty() || self.sections.iter().any(Section::has_alert_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(summary: &str, sections: &[(&str, &str)]) -> HostRecord {
        HostRecord {
            ip: "10.0.0.1".to_string(),
            hostname: "node-a".to_string(),
            check_time: "2024-05-01 08:00:00".to_string(),
            sections: sections
                .iter()
                .map(|(name, body)| Section {
                    name: (*name).to_string(),
                    body: (*body).to_string(),
                })
                .collect(),
            summary: summary.to_string(),
        }
    }

    #[test]
    fn alarm_sections_use_canonical_names() {
        let record = make_record("内存: 告警, 磁盘: OK", &[("内存使用", "92%")]);
        let alarms = record.alarm_sections();
        assert!(alarms.contains("内存使用"));
        assert!(!alarms.contains("磁盘使用"));
    }

    #[test]
    fn body_tag_alarms_section_without_summary_flag() {
        let record = make_record("磁盘: OK", &[("磁盘使用", "/data 95% [告警]")]);
        let alarms = record.alarm_sections();
        let section = record.section("磁盘使用").expect("section exists");
        assert!(alarms.is_empty());
        assert!(section.is_alarmed(&alarms));
        assert!(record.has_alerts());
    }

    #[test]
    fn clean_record_has_no_alerts() {
        let record = make_record("内存: OK", &[("内存使用", "40%")]);
        assert!(!record.has_alerts());
    }

    #[test]
    fn page_names() {
        let record = make_record("", &[]);
        assert_eq!(record.detail_page_name(), "device_10.0.0.1.html");
        assert!(is_report_page("index.html"));
        assert!(is_report_page("device_10.0.0.1.html"));
        assert!(!is_report_page("notes.html"));
        assert!(!is_report_page("device_10.0.0.1.log"));
    }

    #[test]
    fn section_lookup_by_name() {
        let record = make_record("", &[("A", "a"), ("B", "b")]);
        assert_eq!(record.section("B").map(|s| s.body.as_str()), Some("b"));
        assert!(record.section("C").is_none());
        assert_eq!(record.section_names(), ["A", "B"]);
    }
}
