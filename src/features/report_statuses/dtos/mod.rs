mod report_status_dto;

pub use report_status_dto::{CreateReportStatusDto, ReportStatusResponseDto};
