mod report_status_service;

pub use report_status_service::ReportStatusService;
