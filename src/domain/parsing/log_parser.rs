use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::entities::host_record::{HostRecord, Section};

const MARKER_PREFIX: &str = "---- ";
const MARKER_SUFFIX: &str = " ----";

/// Log file extensions recognised by default, longest first.
pub const LOG_EXTENSIONS: &[&str] = &[".log.txt", ".log"];

#[allow(clippy::expect_used)]
static HOSTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"主机名: (.*)").expect("hostname pattern is valid"));

#[allow(clippy::expect_used)]
static CHECK_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"系统巡检报告 \| (.*) =====").expect("check time pattern is valid")
});

#[allow(clippy::expect_used)]
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"巡检总结: (.*)").expect("summary pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed log: missing {field}")]
    MissingField { field: &'static str },
}

/// Parses one inspection log.
///
/// `file_name` is the bare file name (no directory); the host IP is taken from it.
///
/// # Errors
///
/// Returns `ParseError::MissingField` if the hostname, check time or summary
/// label is absent.
pub fn parse_log(file_name: &str, content: &str) -> Result<HostRecord, ParseError> {
    let hostname = first_capture(&HOSTNAME_RE, content, "hostname")?;
    let check_time = first_capture(&CHECK_TIME_RE, content, "check time")?;
    let summary = first_capture(&SUMMARY_RE, content, "summary")?;

    Ok(HostRecord {
        ip: ip_from_file_name(file_name).to_string(),
        hostname,
        check_time,
        sections: split_sections(content),
        summary,
    })
}

/// Text before the first `_`, or the name without its log extension.
#[must_use]
pub fn ip_from_file_name(file_name: &str) -> &str {
    if let Some((prefix, _)) = file_name.split_once('_') {
        return prefix;
    }
    LOG_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

fn first_capture(re: &Regex, content: &str, field: &'static str) -> Result<String, ParseError> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .ok_or(ParseError::MissingField { field })
}

fn marker_name(line: &str) -> Option<&str> {
    line.strip_prefix(MARKER_PREFIX)?.strip_suffix(MARKER_SUFFIX)
}

/// Splits the content on marker lines. Lines before the first marker are dropped,
/// as are markers with no following line.
fn split_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<&str> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(name) = marker_name(line) {
            flush(&mut sections, current, &mut lines);
            current = Some(name);
        } else if current.is_some() {
            lines.push(line);
        }
    }
    flush(&mut sections, current, &mut lines);

    sections
}

fn flush(sections: &mut Vec<Section>, name: Option<&str>, lines: &mut Vec<&str>) {
    let Some(name) = name else {
        return;
    };
    if lines.is_empty() {
        return;
    }
    let body = lines.join("\n");
    lines.clear();

    // A repeated name keeps its first position with the latest body.
    if let Some(existing) = sections.iter_mut().find(|s| s.name == name) {
        existing.body = body;
    } else {
        sections.push(Section {
            name: name.to_string(),
            body,
        });
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
===== 系统巡检报告 | 2024-05-01 08:00:00 =====
主机名: node-a
---- A ----
line a1
line a2
---- B ----
line b1
巡检总结: A: OK, B: 告警
";

    #[test]
    fn sections_keep_source_order_and_summary_is_verbatim() {
        let record = parse_log("10.0.0.1_check.log", SAMPLE).expect("parse");
        assert_eq!(record.section_names(), ["A", "B"]);
        assert_eq!(record.summary, "A: OK, B: 告警");
        assert_eq!(record.hostname, "node-a");
        assert_eq!(record.check_time, "2024-05-01 08:00:00");
        assert_eq!(record.ip, "10.0.0.1");
    }

    #[test]
    fn body_is_text_between_markers() {
        let record = parse_log("10.0.0.1_check.log", SAMPLE).expect("parse");
        assert_eq!(record.sections[0].body, "line a1\nline a2");
        // the summary label line sits inside the last section
        assert_eq!(record.sections[1].body, "line b1\n巡检总结: A: OK, B: 告警");
    }

    #[test]
    fn missing_hostname_is_malformed() {
        let content = SAMPLE.replace("主机名: node-a\n", "");
        let err = parse_log("10.0.0.1_x.log", &content).expect_err("should fail");
        assert_eq!(err, ParseError::MissingField { field: "hostname" });
        assert_eq!(err.to_string(), "malformed log: missing hostname");
    }

    #[test]
    fn missing_check_time_and_summary_are_malformed() {
        let no_time = SAMPLE.replace("===== 系统巡检报告 | 2024-05-01 08:00:00 =====\n", "");
        assert_eq!(
            parse_log("a.log", &no_time),
            Err(ParseError::MissingField { field: "check time" })
        );
        let no_summary = SAMPLE.replace("巡检总结: A: OK, B: 告警\n", "");
        assert_eq!(
            parse_log("a.log", &no_summary),
            Err(ParseError::MissingField { field: "summary" })
        );
    }

    #[test]
    fn lines_before_first_marker_are_discarded() {
        let content = "主机名: h\n系统巡检报告 | t =====\n巡检总结: x: OK\npreamble\n---- A ----\nbody\n";
        let record = parse_log("1.2.3.4_a.log", content).expect("parse");
        assert_eq!(record.sections.len(), 1);
        assert_eq!(record.sections[0].body, "body");
    }

    #[test]
    fn marker_without_body_is_dropped() {
        let content = "主机名: h\n系统巡检报告 | t =====\n巡检总结: x: OK\n---- Empty ----\n---- A ----\nbody";
        let record = parse_log("h.log", content).expect("parse");
        assert_eq!(record.section_names(), ["A"]);
    }

    #[test]
    fn repeated_section_keeps_first_position_latest_body() {
        let content = "主机名: h\n系统巡检报告 | t =====\n巡检总结: x: OK\n---- A ----\nold\n---- B ----\nb\n---- A ----\nnew\n";
        let record = parse_log("h.log", content).expect("parse");
        assert_eq!(record.section_names(), ["A", "B"]);
        assert_eq!(record.section("A").map(|s| s.body.as_str()), Some("new"));
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let content = SAMPLE.replace('\n', "\r\n");
        let record = parse_log("10.0.0.1_check.log", &content).expect("parse");
        assert_eq!(record.hostname, "node-a");
        assert_eq!(record.summary, "A: OK, B: 告警");
        assert_eq!(record.section_names(), ["A", "B"]);
        assert_eq!(record.sections[0].body, "line a1\nline a2");
    }

    #[test]
    fn arbitrary_section_names_pass_through() {
        let content = "主机名: h\n系统巡检报告 | t =====\n巡检总结: x: OK\n---- 自定义 检查 ----\nv\n";
        let record = parse_log("h.log", content).expect("parse");
        assert_eq!(record.section_names(), ["自定义 检查"]);
    }

    #[test]
    fn marker_needs_both_delimiters() {
        let content = "主机名: h\n系统巡检报告 | t =====\n巡检总结: x: OK\n---- A ----\n---- not a marker\nv\n";
        let record = parse_log("h.log", content).expect("parse");
        assert_eq!(record.sections[0].body, "---- not a marker\nv");
    }

    #[test]
    fn ip_from_file_name_variants() {
        assert_eq!(ip_from_file_name("192.168.1.10_20240501.log"), "192.168.1.10");
        assert_eq!(ip_from_file_name("192.168.1.10_a_b.log.txt"), "192.168.1.10");
        assert_eq!(ip_from_file_name("host1.log"), "host1");
        assert_eq!(ip_from_file_name("host2.log.txt"), "host2");
        assert_eq!(ip_from_file_name("bare"), "bare");
    }
}
