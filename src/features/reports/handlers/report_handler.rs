use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateMapReportDto, ReportMarkerDto};
use crate::features::reports::services::ReportService;

/// List markers for all active reports
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Active report markers", body = Vec<ReportMarkerDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportMarkerDto>>> {
    let markers = service.list_active_markers().await?;
    Ok(Json(markers))
}

/// Submit a report from a map click
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateMapReportDto,
    responses(
        (status = 201, description = "Report created", body = ReportMarkerDto),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateMapReportDto>,
) -> Result<(StatusCode, Json<ReportMarkerDto>)> {
    dto.validate()?;

    let marker = service.create_report_from_click(dto).await?;
    Ok((StatusCode::CREATED, Json(marker)))
}
