//! Static HTML report pages. Everything here is a pure function of its inputs.

pub mod detail_page;
pub mod escape;
pub mod index_page;
pub mod service_table;

use chrono::NaiveDate;

use crate::domain::entities::host_record::HostRecord;
use crate::domain::ports::renderer::ReportRenderer;

pub use detail_page::render_detail;
pub use index_page::render_index;

/// [`ReportRenderer`] producing the `index.html` / `device_<ip>.html` pages.
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn index_page(&self, records: &[HostRecord], date: NaiveDate) -> String {
        render_index(records, date)
    }

    fn detail_page(&self, record: &HostRecord, date: NaiveDate) -> String {
        render_detail(record, date)
    }
}
