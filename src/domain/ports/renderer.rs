use chrono::NaiveDate;

use crate::domain::entities::host_record::HostRecord;

/// Turns parsed records into report pages. Implementations do no I/O.
pub trait ReportRenderer {
    /// Overview page with one card per record, in the given order.
    fn index_page(&self, records: &[HostRecord], date: NaiveDate) -> String;

    /// Full page for a single host.
    fn detail_page(&self, record: &HostRecord, date: NaiveDate) -> String;
}
