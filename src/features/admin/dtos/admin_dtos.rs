use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::dtos::LocationOptionDto;
use crate::features::reports::models::{ReportDetail, ReportType};
use crate::features::users::dtos::UserOptionDto;

// =============================================================================
// REPORTS
// =============================================================================

/// Report as shown in the back office
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminReportDto {
    pub id: i64,
    pub location_id: i64,
    pub location_name: String,
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    pub report_type: ReportType,
    pub category: String,
    pub severity: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub magnitude: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub temperature: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub humidity: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub wind_speed: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub precipitation: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub timestamp: DateTime<Utc>,
    /// Send back unchanged when replacing the report
    pub row_version: i32,
}

impl From<ReportDetail> for AdminReportDto {
    fn from(d: ReportDetail) -> Self {
        let r = d.report;
        Self {
            id: r.id,
            location_id: r.location_id,
            location_name: d.location_name,
            user_id: r.user_id,
            user_email: d.user_email,
            report_type: r.report_type,
            category: r.category,
            severity: r.severity,
            magnitude: r.magnitude,
            temperature: r.temperature,
            humidity: r.humidity,
            wind_speed: r.wind_speed,
            precipitation: r.precipitation,
            image_url: r.image_url,
            is_active: r.is_active,
            timestamp: r.timestamp,
            row_version: r.row_version,
        }
    }
}

/// Full report record for create and replace
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertReportDto {
    pub location_id: i64,

    pub user_id: Option<i64>,

    pub report_type: ReportType,

    #[validate(
        length(min = 1, max = 100, message = "Category must be 1-100 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub category: String,

    #[validate(length(max = 50, message = "Severity must not exceed 50 characters"))]
    pub severity: Option<String>,

    #[validate(custom(function = "crate::shared::validation::validate_measurement"))]
    #[schema(value_type = Option<f64>)]
    pub magnitude: Option<Decimal>,

    #[validate(custom(function = "crate::shared::validation::validate_measurement"))]
    #[schema(value_type = Option<f64>)]
    pub temperature: Option<Decimal>,

    #[validate(custom(function = "crate::shared::validation::validate_measurement"))]
    #[schema(value_type = Option<f64>)]
    pub humidity: Option<Decimal>,

    #[validate(custom(function = "crate::shared::validation::validate_measurement"))]
    #[schema(value_type = Option<f64>)]
    pub wind_speed: Option<Decimal>,

    #[validate(custom(function = "crate::shared::validation::validate_measurement"))]
    #[schema(value_type = Option<f64>)]
    pub precipitation: Option<Decimal>,

    #[validate(
        url(message = "Image URL must be a valid URL"),
        length(max = 255, message = "Image URL must not exceed 255 characters")
    )]
    pub image_url: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Defaults to the time of creation; kept as stored when omitted on replace
    pub timestamp: Option<DateTime<Utc>>,

    /// Required on replace: the `row_version` the edit was based on
    pub row_version: Option<i32>,
}

fn default_active() -> bool {
    true
}

/// Selection lists for the report forms
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportOptionsDto {
    pub locations: Vec<LocationOptionDto>,
    pub users: Vec<UserOptionDto>,
    pub report_types: Vec<ReportType>,
}

// =============================================================================
// ANTI-FORGERY
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CsrfTokenDto {
    /// Echo this value in the `X-CSRF-Token` header of state-changing requests
    pub token: String,
}
