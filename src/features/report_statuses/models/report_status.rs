use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Review status enum matching database enum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "report_status_value")]
pub enum ReportStatusValue {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReportStatusValue {
    pub const ALL: [ReportStatusValue; 3] = [
        ReportStatusValue::Pending,
        ReportStatusValue::Approved,
        ReportStatusValue::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatusValue::Pending => "Pending",
            ReportStatusValue::Approved => "Approved",
            ReportStatusValue::Rejected => "Rejected",
        }
    }

    /// Approved and Rejected are decisions; Pending is not
    pub fn is_decision(&self) -> bool {
        !matches!(self, ReportStatusValue::Pending)
    }
}

impl std::fmt::Display for ReportStatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatusValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportStatusValue::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown report status: {}", s))
    }
}

/// Database model for a report status entry
#[derive(Debug, Clone, FromRow)]
pub struct ReportStatusEntry {
    pub id: i64,
    pub report_id: i64,
    pub status: ReportStatusValue,
    pub reviewed_by_id: Option<i64>,
    pub review_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateReportStatus {
    pub report_id: i64,
    pub status: ReportStatusValue,
    pub reviewed_by_id: Option<i64>,
    pub review_timestamp: Option<DateTime<Utc>>,
}
