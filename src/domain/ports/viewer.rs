use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("report not found: {0}")]
    NotFound(String),
    #[error("failed to launch viewer: {0}")]
    LaunchFailed(String),
}

pub trait ReportViewer {
    /// Show a generated report page to the user.
    ///
    /// # Errors
    ///
    /// Returns `ViewerError` if the page is missing or no viewer can be started.
    fn open(&self, page: &Path) -> Result<(), ViewerError>;
}
