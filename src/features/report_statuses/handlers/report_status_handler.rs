use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::report_statuses::dtos::{CreateReportStatusDto, ReportStatusResponseDto};
use crate::features::report_statuses::services::ReportStatusService;
use crate::shared::types::{ApiResponse, Meta};

/// Status history of a report, oldest first
#[utoipa::path(
    get,
    path = "/api/admin/reports/{id}/statuses",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Status history", body = ApiResponse<Vec<ReportStatusResponseDto>>),
        (status = 404, description = "Report not found")
    ),
    tag = "report-statuses"
)]
pub async fn list_report_statuses(
    State(service): State<Arc<ReportStatusService>>,
    Path(report_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ReportStatusResponseDto>>>> {
    let entries = service.list(report_id).await?;
    let total = entries.len() as i64;
    Ok(Json(ApiResponse::success(Some(entries), None, Some(Meta { total }))))
}

/// Record a review decision for a report
#[utoipa::path(
    post,
    path = "/api/admin/reports/{id}/statuses",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = CreateReportStatusDto,
    responses(
        (status = 201, description = "Status recorded", body = ApiResponse<ReportStatusResponseDto>),
        (status = 400, description = "Invalid status or reviewer"),
        (status = 404, description = "Report not found")
    ),
    tag = "report-statuses"
)]
pub async fn create_report_status(
    State(service): State<Arc<ReportStatusService>>,
    Path(report_id): Path<i64>,
    AppJson(dto): AppJson<CreateReportStatusDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportStatusResponseDto>>)> {
    let entry = service.record(report_id, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}
