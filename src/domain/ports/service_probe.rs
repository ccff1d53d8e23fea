use thiserror::Error;

use crate::domain::entities::health_sample::ServiceCheck;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("service manager not available: {0}")]
    Unavailable(String),
    #[error("failed to query {service}: {reason}")]
    QueryFailed { service: String, reason: String },
}

pub trait ServiceProbe {
    /// Query the state and running time of one unit.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError` if the service manager cannot be run or its
    /// output cannot be interpreted.
    fn probe(&self, service: &str) -> Result<ServiceCheck, ProbeError>;
}
