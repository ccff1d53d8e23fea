pub mod section_alias;
pub mod status;
pub mod thresholds;
pub mod tone;

pub use section_alias::{SECTION_ALIASES, canonical_section, short_label};
pub use status::{ALERT_MARKER, ServiceState, UsageStatus};
pub use thresholds::ThresholdSet;
pub use tone::Tone;
