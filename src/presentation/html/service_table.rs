//! Column alignment for the service status section.
//!
//! The inspection tool prints that section as a loosely aligned table with
//! `|` borders and `-+=` rule lines. Borders and rules are stripped and each
//! row is re-laid out in fixed-width columns.

const MIN_FIELDS: usize = 4;

/// Re-aligns service rows into columns of width 20, 10, 20 and 15.
///
/// Rows with fewer than four whitespace-separated fields are dropped. Fields
/// past the third are joined into the last column.
#[must_use]
pub fn format_service_status(body: &str) -> String {
    body.lines()
        .filter_map(format_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(line: &str) -> Option<String> {
    let stripped = line.replace('|', "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() || is_rule(trimmed) {
        return None;
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let rest = fields[3..].join(" ");
    Some(format!(
        "{:<20} {:<10} {:<20} {:<15}",
        fields[0], fields[1], fields[2], rest
    ))
}

fn is_rule(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '-' | '+' | '=') || c.is_whitespace())
}
