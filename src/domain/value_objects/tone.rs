use serde::{Deserialize, Serialize};

use super::status::ALERT_MARKER;

/// Display tone of a summary status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Alert,
    Ok,
    #[default]
    Neutral,
}

impl Tone {
    /// Alert wins over OK: `"OK(告警)"` is an alert.
    #[must_use]
    pub fn of_status(status: &str) -> Self {
        if status.contains(ALERT_MARKER) {
            Self::Alert
        } else if status.to_uppercase().contains("OK") {
            Self::Ok
        } else {
            Self::Neutral
        }
    }

    /// CSS color token used by the HTML report.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Alert => "#FF4444",
            Self::Ok => "#4CAF50",
            Self::Neutral => "#000000",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Ok => write!(f, "ok"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}
