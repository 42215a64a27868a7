mod report;

pub use report::{Report, ReportDetail, ReportFields, ReportMarker, ReportType};
