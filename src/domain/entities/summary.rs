use serde::{Deserialize, Serialize};

use crate::domain::value_objects::section_alias::canonical_section;
use crate::domain::value_objects::tone::Tone;

const ITEM_SEPARATOR: &str = ", ";
const PAIR_SEPARATOR: &str = ": ";

/// One `label: status` pair of a summary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Short label as written in the summary (`内存`)
    pub label: String,
    pub status: String,
    /// Section the label refers to (`内存使用`)
    pub section: String,
}

impl SummaryEntry {
    /// Splits a summary line into entries. Items without a `": "` separator are ignored.
    #[must_use]
    pub fn parse_all(summary: &str) -> Vec<Self> {
        summary
            .split(ITEM_SEPARATOR)
            .filter_map(|item| {
                let (label, status) = item.split_once(PAIR_SEPARATOR)?;
                Some(Self {
                    label: label.to_string(),
                    status: status.to_string(),
                    section: canonical_section(label).to_string(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        Tone::of_status(&self.status)
    }
}
