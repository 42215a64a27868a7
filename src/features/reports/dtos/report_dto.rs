use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::ReportMarker;

/// Request DTO for a report submitted from the public map.
/// Coordinates are accepted as JSON numbers or numeric strings.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMapReportDto {
    #[validate(
        length(min = 1, max = 100, message = "Category must be 1-100 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub category: String,

    #[validate(length(max = 50, message = "Severity must not exceed 50 characters"))]
    pub severity: Option<String>,

    #[validate(custom(function = "crate::shared::validation::validate_coordinate"))]
    #[schema(value_type = f64)]
    pub latitude: Decimal,

    #[validate(custom(function = "crate::shared::validation::validate_coordinate"))]
    #[schema(value_type = f64)]
    pub longitude: Decimal,
}

/// Marker shown on the public map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportMarkerDto {
    pub id: i64,
    pub category: String,
    pub severity: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub longitude: Decimal,
}

impl From<ReportMarker> for ReportMarkerDto {
    fn from(m: ReportMarker) -> Self {
        Self {
            id: m.id,
            category: m.category,
            severity: m.severity,
            timestamp: m.timestamp,
            latitude: m.latitude,
            longitude: m.longitude,
        }
    }
}
