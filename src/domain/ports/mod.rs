pub mod collector;
pub mod renderer;
pub mod service_probe;
pub mod store;
pub mod viewer;

pub use collector::{CollectionError, HostCollector};
pub use renderer::ReportRenderer;
pub use service_probe::{ProbeError, ServiceProbe};
pub use store::{SampleStore, StoreError};
pub use viewer::{ReportViewer, ViewerError};
