use serde::{Deserialize, Serialize};

/// Literal tag the inspection tooling uses for a failed check.
pub const ALERT_MARKER: &str = "告警";

/// Result of comparing a usage reading against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageStatus {
    Normal,
    Alert,
    /// The reading itself was unavailable
    Unknown,
}

impl UsageStatus {
    /// Alert when `usage` is strictly above `limit`.
    #[must_use]
    pub fn evaluate(usage: Option<f64>, limit: f64) -> Self {
        match usage {
            Some(value) if value > limit => Self::Alert,
            Some(_) => Self::Normal,
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for UsageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "正常"),
            Self::Alert => write!(f, "{ALERT_MARKER}"),
            Self::Unknown => write!(f, "未知"),
        }
    }
}

/// Unit state as reported by the service manager
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceState {
    Active,
    Inactive,
    /// The probe failed, so the state could not be determined
    Unknown,
    /// Any other state word (`failed`, `activating`, ...)
    Other(String),
}

impl ServiceState {
    /// Maps the output of `systemctl is-active`.
    #[must_use]
    pub fn from_systemctl(output: &str) -> Self {
        match output.trim() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "" | "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Alert column value: anything but an active unit is flagged.
    #[must_use]
    pub const fn alert_status(&self) -> UsageStatus {
        if self.is_active() {
            UsageStatus::Normal
        } else {
            UsageStatus::Alert
        }
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Unknown => write!(f, "unknown"),
            Self::Other(state) => write!(f, "{state}"),
        }
    }
}
