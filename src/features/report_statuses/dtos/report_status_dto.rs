use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::report_statuses::models::{ReportStatusEntry, ReportStatusValue};

/// Request DTO for recording a review decision
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReportStatusDto {
    /// Defaults to `Pending`
    #[serde(default)]
    pub status: ReportStatusValue,
    pub reviewed_by_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportStatusResponseDto {
    pub id: i64,
    pub report_id: i64,
    pub status: ReportStatusValue,
    pub reviewed_by_id: Option<i64>,
    pub review_timestamp: Option<DateTime<Utc>>,
}

impl From<ReportStatusEntry> for ReportStatusResponseDto {
    fn from(s: ReportStatusEntry) -> Self {
        Self {
            id: s.id,
            report_id: s.report_id,
            status: s.status,
            reviewed_by_id: s.reviewed_by_id,
            review_timestamp: s.review_timestamp,
        }
    }
}
