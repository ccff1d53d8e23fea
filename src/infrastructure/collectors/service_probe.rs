use std::process::{Command, Output};

use chrono::{Local, NaiveDateTime};

use crate::domain::entities::health_sample::{
    NOT_RUNNING, RUNNING_TIME_UNKNOWN, ServiceCheck, format_running_time,
};
use crate::domain::ports::service_probe::{ProbeError, ServiceProbe};
use crate::domain::value_objects::status::ServiceState;

/// Running time reported by `sc query`, which has no start timestamp.
const SC_RUNNING: &str = "运行中";
const ACTIVE_ENTER_FORMAT: &str = "%a %Y-%m-%d %H:%M:%S";

/// Queries unit state from the platform service manager.
///
/// Uses `systemctl` everywhere except Windows, where `sc query` is used.
pub struct SystemServiceProbe;

impl SystemServiceProbe {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SystemServiceProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceProbe for SystemServiceProbe {
    fn probe(&self, service: &str) -> Result<ServiceCheck, ProbeError> {
        if cfg!(windows) {
            probe_sc(service)
        } else {
            probe_systemctl(service)
        }
    }
}

fn run(program: &str, args: &[&str], service: &str) -> Result<Output, ProbeError> {
    Command::new(program).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::Unavailable(format!("{program} not found"))
        } else {
            ProbeError::QueryFailed {
                service: service.to_string(),
                reason: format!("failed to run {program}: {e}"),
            }
        }
    })
}

fn probe_systemctl(service: &str) -> Result<ServiceCheck, ProbeError> {
    // is-active exits non-zero for inactive units; the state word is still on stdout.
    let output = run("systemctl", &["is-active", service], service)?;
    let state = ServiceState::from_systemctl(&String::from_utf8_lossy(&output.stdout));

    let running_time = match state {
        ServiceState::Active => active_running_time(service),
        ServiceState::Unknown => RUNNING_TIME_UNKNOWN.to_string(),
        ServiceState::Inactive | ServiceState::Other(_) => NOT_RUNNING.to_string(),
    };

    Ok(ServiceCheck {
        name: service.to_string(),
        state,
        running_time,
    })
}

fn active_running_time(service: &str) -> String {
    let output = match run(
        "systemctl",
        &["show", service, "--property=ActiveEnterTimestamp", "--value"],
        service,
    ) {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            tracing::debug!("systemctl show {service} exited with {}", output.status);
            return RUNNING_TIME_UNKNOWN.to_string();
        }
        Err(e) => {
            tracing::debug!("{e}");
            return RUNNING_TIME_UNKNOWN.to_string();
        }
    };

    parse_active_enter(&String::from_utf8_lossy(&output.stdout)).map_or_else(
        || RUNNING_TIME_UNKNOWN.to_string(),
        |started| running_time_since(started, Local::now().naive_local()),
    )
}

/// Parses `Mon 2024-05-01 08:00:00 CST`, ignoring the zone token.
fn parse_active_enter(value: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let stamp = match tokens.as_slice() {
        [weekday, date, time, _] | [weekday, date, time] => {
            format!("{weekday} {date} {time}")
        }
        _ => return None,
    };
    NaiveDateTime::parse_from_str(&stamp, ACTIVE_ENTER_FORMAT).ok()
}

fn running_time_since(started: NaiveDateTime, now: NaiveDateTime) -> String {
    format_running_time(now - started)
}

fn probe_sc(service: &str) -> Result<ServiceCheck, ProbeError> {
    let output = run("sc", &["query", service], service)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let state = parse_sc_query(&stdout);
    if state == ServiceState::Unknown && !output.status.success() {
        return Err(ProbeError::QueryFailed {
            service: service.to_string(),
            reason: format!("sc exited with {}", output.status),
        });
    }

    let running_time = if state.is_active() {
        SC_RUNNING
    } else {
        NOT_RUNNING
    };
    Ok(ServiceCheck {
        name: service.to_string(),
        state,
        running_time: running_time.to_string(),
    })
}

fn parse_sc_query(stdout: &str) -> ServiceState {
    if stdout.contains("RUNNING") {
        ServiceState::Active
    } else if stdout.contains("STOPPED") {
        ServiceState::Inactive
    } else {
        ServiceState::Unknown
    }
}
