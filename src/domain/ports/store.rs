use thiserror::Error;

use crate::domain::entities::health_sample::HealthSample;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("cannot encode {0}")]
    Encoding(String),
}

pub trait SampleStore {
    /// Append one sample; the header row is written only when the store is new.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the row cannot be encoded or written.
    fn append(&self, sample: &HealthSample) -> Result<(), StoreError>;
}
