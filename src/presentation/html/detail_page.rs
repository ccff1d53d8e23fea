use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::NaiveDate;

use super::escape::html_escape;
use super::service_table::format_service_status;
use crate::domain::entities::host_record::{BODY_ALERT_TAG, HostRecord, INDEX_PAGE, Section};
use crate::domain::value_objects::section_alias::{SERVICE_STATUS_SECTION, short_label};

const ALARM_HEADER_STYLE: &str = "background-color: #FF4444; color: white;";
const ALARM_BODY_STYLE: &str = "background-color: #FFEBEE;";
const PLAIN_HEADER_STYLE: &str = "background-color: #f0f0f0;";

const STYLE: &str = r"
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; padding-top: 150px; }
.header-fixed { position: fixed; top: 0; left: 0; right: 0; background-color: white; padding: 15px 20px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); z-index: 1000; }
.content-container { margin-top: 20px; }
.summary-link { display: inline-block; margin: 5px 10px; padding: 3px 8px; border-radius: 3px; cursor: pointer; text-decoration: none; }
.summary-link:hover { background-color: #f0f0f0; }
.back-link { margin-right: 20px; }
.control-buttons { margin-top: 10px; }
.control-button { padding: 5px 10px; margin-right: 10px; border: none; border-radius: 3px; background-color: #4CAF50; color: white; cursor: pointer; }
.control-button:hover { background-color: #45a049; }
.section h3 { cursor: pointer; padding: 10px; }
.section-body { display: none; }
.section-body pre { margin: 10px; padding: 10px; font-family: monospace; white-space: pre-wrap; }
.section-body pre.service-table { font-family: 'Courier New', Courier, monospace; white-space: pre; font-size: 14px; line-height: 1.5; padding: 15px; background-color: white; border-radius: 4px; overflow-x: auto; }
.alert-tag { color: #FF4444; font-weight: bold; }
";

// Sections are addressed by name through data attributes, so names with
// quotes or spaces need no escaping inside the script.
const SCRIPT: &str = r"
function setOpen(name, open) {
    var section = document.getElementById('section_' + name);
    if (!section) { return; }
    section.querySelector('.section-body').style.display = open ? 'block' : 'none';
    section.querySelector('.marker').textContent = open ? '▼' : '▶';
}
function toggleSection(name) {
    var section = document.getElementById('section_' + name);
    if (!section) { return; }
    setOpen(name, section.querySelector('.section-body').style.display !== 'block');
}
function toggleAll(open) {
    document.querySelectorAll('.section').forEach(function (s) { setOpen(s.dataset.section, open); });
}
function showSection(name) {
    toggleAll(false);
    var section = document.getElementById('section_' + name);
    if (!section) { return; }
    setOpen(name, true);
    var headerHeight = document.querySelector('.header-fixed').offsetHeight;
    var top = window.pageYOffset + section.getBoundingClientRect().top - headerHeight - 20;
    window.scrollTo({ top: top, behavior: 'smooth' });
}
window.onload = function () {
    var params = new URLSearchParams(window.location.search);
    if (params.get('show') === 'all') {
        toggleAll(true);
    } else if (params.get('section')) {
        showSection(params.get('section'));
    }
};
";

/// Detail page for one host: fixed header, summary links, one collapsible block per section.
#[must_use]
pub fn render_detail(record: &HostRecord, date: NaiveDate) -> String {
    let ip = html_escape(&record.ip);
    let hostname = html_escape(&record.hostname);
    let check_time = html_escape(&record.check_time);
    let date = date.format("%Y-%m-%d");

    let alarms = record.alarm_sections();
    let summary = summary_links(record);
    let sections: String = record
        .sections
        .iter()
        .map(|section| section_block(section, &alarms))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>设备 {ip} 巡检报告 - {date}</title>
<style>{STYLE}</style>
<script>{SCRIPT}</script>
</head>
<body>
<div class="header-fixed">
    <a href="{INDEX_PAGE}" class="back-link">返回设备列表</a>
    <strong>IP: {ip}</strong> | 主机名: {hostname} | 检查时间: {check_time}
    <div class="control-buttons">
        <button class="control-button" onclick="toggleAll(true)">全部展开</button>
        <button class="control-button" onclick="toggleAll(false)">全部折叠</button>
    </div>
</div>
<div class="content-container">
<h1>设备巡检详细信息</h1>
<hr>
<h3>巡检总结:</h3>
<p style="line-height: 2;">{summary}</p>
<hr>
<div>
{sections}</div>
</div>
</body>
</html>
"#
    )
}

fn summary_links(record: &HostRecord) -> String {
    let mut links = String::new();
    for entry in record.summary_entries() {
        let _ = write!(
            links,
            r#"<a href="javascript:void(0)" class="summary-link" data-section="{section}" onclick="showSection(this.dataset.section)" style="color: {color};">{label}: {status}</a>"#,
            section = html_escape(&entry.section),
            color = entry.tone().color(),
            label = html_escape(&entry.label),
            status = html_escape(&entry.status),
        );
    }
    links
}

fn section_block(section: &Section, alarms: &BTreeSet<String>) -> String {
    let (header_style, body_style) = if section.is_alarmed(alarms) {
        (ALARM_HEADER_STYLE, ALARM_BODY_STYLE)
    } else {
        (PLAIN_HEADER_STYLE, "")
    };
    let id = html_escape(&section.name);
    let display = html_escape(short_label(&section.name));

    format!(
        r#"<div class="section" id="section_{id}" data-section="{id}">
    <h3 onclick="toggleSection(this.parentElement.dataset.section)" style="{header_style}"><span class="marker">▶</span> {display}</h3>
    <div class="section-body" style="{body_style}">
        {body}
    </div>
</div>
<hr>
"#,
        body = section_body(section),
    )
}

fn section_body(section: &Section) -> String {
    if section.name == SERVICE_STATUS_SECTION {
        let table = highlight_alerts(&html_escape(&format_service_status(&section.body)));
        format!(r#"<pre class="service-table">{table}</pre>"#)
    } else {
        format!("<pre>{}</pre>", highlight_alerts(&html_escape(&section.body)))
    }
}

/// Wraps alert tags in already-escaped text.
fn highlight_alerts(escaped: &str) -> String {
    escaped.replace(
        BODY_ALERT_TAG,
        &format!(r#"<span class="alert-tag">{BODY_ALERT_TAG}</span>"#),
    )
}
