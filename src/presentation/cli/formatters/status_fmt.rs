use colored::{ColoredString, Colorize};

use crate::domain::entities::health_sample::ResourceUsage;
use crate::domain::value_objects::status::{ServiceState, UsageStatus};
use crate::domain::value_objects::tone::Tone;

/// Usage bar, red past the threshold.
#[must_use]
pub fn progress_bar(usage: &ResourceUsage, width: usize) -> String {
    let value = usage.percent.unwrap_or(0.0);
    let ratio = (value / 100.0).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_filled = "█".repeat(filled);
    let bar_empty = "░".repeat(empty);

    let colored_bar = match usage.status {
        UsageStatus::Alert => bar_filled.red().bold(),
        UsageStatus::Normal => bar_filled.green(),
        UsageStatus::Unknown => bar_filled.dimmed(),
    };

    format!("{colored_bar}{bar_empty}")
}

#[must_use]
pub fn colorize_usage(usage: &ResourceUsage) -> ColoredString {
    paint_status(usage.percent_label(), usage.status)
}

#[must_use]
pub fn colorize_status(status: UsageStatus) -> ColoredString {
    paint_status(status.to_string(), status)
}

#[must_use]
pub fn colorize_service_state(state: &ServiceState) -> ColoredString {
    let text = state.to_string();
    match state {
        ServiceState::Active => text.green(),
        ServiceState::Unknown => text.yellow(),
        ServiceState::Inactive | ServiceState::Other(_) => text.red().bold(),
    }
}

/// Terminal counterpart of the report's summary link colors.
#[must_use]
pub fn colorize_tone(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Alert => text.red().bold(),
        Tone::Ok => text.green(),
        Tone::Neutral => text.normal(),
    }
}

fn paint_status(text: String, status: UsageStatus) -> ColoredString {
    match status {
        UsageStatus::Alert => text.red().bold(),
        UsageStatus::Normal => text.green(),
        UsageStatus::Unknown => text.yellow(),
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.trim().chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
