mod report_status;

pub use report_status::{CreateReportStatus, ReportStatusEntry, ReportStatusValue};
