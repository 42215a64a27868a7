use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Report type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_type")]
pub enum ReportType {
    Weather,
    Disaster,
    Emergency,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::Weather,
        ReportType::Disaster,
        ReportType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Weather => "Weather",
            ReportType::Disaster => "Disaster",
            ReportType::Emergency => "Emergency",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown report type: {}", s))
    }
}

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: i64,
    pub user_id: Option<i64>,
    pub location_id: i64,
    pub report_type: ReportType,
    pub category: String,
    pub severity: Option<String>,
    pub magnitude: Option<Decimal>,
    pub temperature: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub wind_speed: Option<Decimal>,
    pub precipitation: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub timestamp: DateTime<Utc>,
    pub row_version: i32,
}

/// Every writable report column except the location reference
#[derive(Debug, Clone)]
pub struct ReportFields {
    pub user_id: Option<i64>,
    pub report_type: ReportType,
    pub category: String,
    pub severity: Option<String>,
    pub magnitude: Option<Decimal>,
    pub temperature: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub wind_speed: Option<Decimal>,
    pub precipitation: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub timestamp: DateTime<Utc>,
}

/// Map marker projection: report joined with its location
#[derive(Debug, Clone, FromRow)]
pub struct ReportMarker {
    pub id: i64,
    pub category: String,
    pub severity: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Report with the display fields of its location and submitter
#[derive(Debug, Clone, FromRow)]
pub struct ReportDetail {
    #[sqlx(flatten)]
    pub report: Report,
    pub location_name: String,
    pub user_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_text_encoding() {
        for t in ReportType::ALL {
            assert_eq!(t.as_str().parse::<ReportType>().unwrap(), t);
        }
        assert_eq!(ReportType::Emergency.to_string(), "Emergency");
        assert!("emergency".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_report_type_json_matches_text() {
        let json = serde_json::to_string(&ReportType::Disaster).unwrap();
        assert_eq!(json, "\"Disaster\"");
    }
}
