//! Short summary labels and the section names they refer to.
//!
//! Summary lines use short labels (`内存: OK`) while section markers carry the
//! full name (`---- 内存使用 ----`). Both report pages resolve names through
//! this one table.

/// Section rendered through the service-status column formatter.
pub const SERVICE_STATUS_SECTION: &str = "服务状态";

/// `(short label, canonical section name)` pairs.
pub const SECTION_ALIASES: &[(&str, &str)] = &[
    ("内存", "内存使用"),
    ("磁盘", "磁盘使用"),
    ("服务状态", SERVICE_STATUS_SECTION),
    ("硬件状态", "硬件错误检查"),
    ("Core文件", "Core文件检查"),
    ("内存池", "Updpi内存池检查"),
    ("回填率", "回填率"),
    ("流量情况", "流量情况"),
    ("策略加载", "策略加载信息"),
    ("策略下发", "策略下发检查"),
];

/// Section name for a summary label. Unknown labels pass through unchanged.
#[must_use]
pub fn canonical_section(label: &str) -> &str {
    SECTION_ALIASES
        .iter()
        .find(|(short, _)| *short == label)
        .map_or(label, |&(_, section)| section)
}

/// Summary label for a section name. Unknown names pass through unchanged.
#[must_use]
pub fn short_label(section: &str) -> &str {
    SECTION_ALIASES
        .iter()
        .find(|(_, full)| *full == section)
        .map_or(section, |&(short, _)| short)
}
