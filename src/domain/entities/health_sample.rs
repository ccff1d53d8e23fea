use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::status::{ServiceState, UsageStatus};

/// Running time shown for a unit that is not active.
pub const NOT_RUNNING: &str = "未运行";
/// Running time shown for a unit the probe could not read.
pub const RUNNING_TIME_UNKNOWN: &str = "未知";
/// Placeholder for host facts that could not be read.
pub const UNKNOWN: &str = "Unknown";

/// One sampled row of host health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    /// Local wall-clock time of the sample
    pub checked_at: NaiveDateTime,
    pub hostname: String,
    pub os_version: String,
    pub memory: ResourceUsage,
    pub disk: ResourceUsage,
    /// Preformatted, `DD天HH小时MM分钟` or [`UNKNOWN`]
    pub uptime: String,
    pub services: Vec<ServiceCheck>,
}

/// Usage reading paired with its threshold verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub percent: Option<f64>,
    pub status: UsageStatus,
}

impl ResourceUsage {
    /// `"42.3%"`, or [`UNKNOWN`] when the reading is missing.
    #[must_use]
    pub fn percent_label(&self) -> String {
        self.percent
            .map_or_else(|| UNKNOWN.to_string(), |p| format!("{p:.1}%"))
    }
}

/// State of one monitored unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCheck {
    pub name: String,
    pub state: ServiceState,
    pub running_time: String,
}

impl ServiceCheck {
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: ServiceState::Unknown,
            running_time: RUNNING_TIME_UNKNOWN.to_string(),
        }
    }

    #[must_use]
    pub fn alert_status(&self) -> UsageStatus {
        self.state.alert_status()
    }
}

/// Formats an uptime as `DD天HH小时MM分钟`.
#[must_use]
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    format!("{days:02}天{hours:02}小时{minutes:02}分钟")
}

/// Formats a running duration as `H:MM:SS`, prefixed with `N day(s), ` past one day.
///
/// Negative durations (clock skew) are shown as zero.
#[must_use]
pub fn format_running_time(elapsed: TimeDelta) -> String {
    let total = u64::try_from(elapsed.num_seconds()).unwrap_or(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
