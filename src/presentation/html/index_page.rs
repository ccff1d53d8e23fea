use std::fmt::Write;

use chrono::NaiveDate;

use super::escape::{encode_query_value, html_escape};
use crate::domain::entities::host_record::HostRecord;

const STYLE: &str = r"
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
h1 { color: #333; text-align: center; margin-bottom: 30px; }
.device-list { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 5px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
.device-card { padding: 15px; margin-bottom: 20px; border-radius: 5px; }
.device-card:hover { background-color: #f8f8f8; }
.device-card h3 { margin: 0 0 10px 0; color: #333; }
.device-card p { margin: 5px 0; }
.summary { display: flex; flex-wrap: wrap; }
.summary span { margin-right: 15px; }
.view-report { display: inline-block; margin-top: 10px; padding: 5px 15px; background-color: #4CAF50; color: white; text-decoration: none; border-radius: 3px; }
.view-report:hover { background-color: #45a049; }
hr { border: none; border-top: 1px solid #eee; margin: 15px 0; }
a { text-decoration: none; }
";

/// Overview page: one card per host, summary entries linking into the detail page.
#[must_use]
pub fn render_index(records: &[HostRecord], date: NaiveDate) -> String {
    let title = format!("系统巡检报告 - {}", date.format("%Y-%m-%d"));
    let cards: String = records.iter().map(device_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
<div class="device-list">
{cards}</div>
</body>
</html>
"#
    )
}

fn device_card(record: &HostRecord) -> String {
    let page = html_escape(&record.detail_page_name());
    let mut links = String::new();
    for entry in record.summary_entries() {
        let _ = write!(
            links,
            r#"<span><a href="{page}?section={section}" style="color: {color};">{label}: {status}</a></span>"#,
            section = encode_query_value(&entry.section),
            color = entry.tone().color(),
            label = html_escape(&entry.label),
            status = html_escape(&entry.status),
        );
    }

    format!(
        r#"<div class="device-card">
<h3>IP: {ip}</h3>
<p>主机名: {hostname}</p>
<p class="summary">{links}</p>
<p><a href="{page}?show=all" class="view-report">查看完整报告</a></p>
<hr>
</div>
"#,
        ip = html_escape(&record.ip),
        hostname = html_escape(&record.hostname),
    )
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::host_record::Section;

    fn record(ip: &str, summary: &str) -> HostRecord {
        HostRecord {
            ip: ip.to_string(),
            hostname: "node-a".to_string(),
            check_time: "2024-05-01 08:00:00".to_string(),
            sections: vec![Section {
                name: "内存使用".to_string(),
                body: "40%".to_string(),
            }],
            summary: summary.to_string(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    #[test]
    fn title_carries_render_date() {
        let html = render_index(&[], date());
        assert!(html.contains("<title>系统巡检报告 - 2024-05-01</title>"));
        assert!(html.contains("<h1>系统巡检报告 - 2024-05-01</h1>"));
    }

    #[test]
    fn summary_links_are_colored_by_tone() {
        let html = render_index(&[record("10.0.0.1", "内存: 告警, 磁盘: ok, 流量情况: 10G")], date());
        assert!(html.contains(r#"style="color: #FF4444;">内存: 告警</a>"#));
        assert!(html.contains(r#"style="color: #4CAF50;">磁盘: ok</a>"#));
        assert!(html.contains(r#"style="color: #000000;">流量情况: 10G</a>"#));
    }

    #[test]
    fn links_target_device_page_sections() {
        let html = render_index(&[record("10.0.0.1", "内存: OK")], date());
        let section = encode_query_value("内存使用");
        assert!(html.contains(&format!(r#"href="device_10.0.0.1.html?section={section}""#)));
        assert!(html.contains(r#"href="device_10.0.0.1.html?show=all" class="view-report">查看完整报告</a>"#));
    }

    #[test]
    fn cards_follow_record_order() {
        let html = render_index(
            &[record("10.0.0.2", "A: OK"), record("10.0.0.1", "A: OK")],
            date(),
        );
        let first = html.find("IP: 10.0.0.2").expect("first card");
        let second = html.find("IP: 10.0.0.1").expect("second card");
        assert!(first < second);
    }

    #[test]
    fn log_text_is_escaped() {
        let mut r = record("10.0.0.1", "<b>: OK");
        r.hostname = "<script>alert(1)</script>".to_string();
        let html = render_index(&[r], date());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;: OK"));
    }
}
