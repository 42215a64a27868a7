use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::*;
use crate::features::admin::services::ManageReportService;
use crate::shared::types::{ApiResponse, DeletedDto, Meta, PaginationQuery};

/// List all reports (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<AdminReportDto>>)
    ),
    tag = "admin"
)]
pub async fn list_reports(
    State(service): State<Arc<ManageReportService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminReportDto>>>> {
    let (items, total) = service.list(params.offset(), params.limit()).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Selection lists for the report forms
#[utoipa::path(
    get,
    path = "/api/admin/reports/options",
    responses(
        (status = 200, description = "Locations, users and report types", body = ApiResponse<ReportOptionsDto>)
    ),
    tag = "admin"
)]
pub async fn report_options(
    State(service): State<Arc<ManageReportService>>,
) -> Result<Json<ApiResponse<ReportOptionsDto>>> {
    let options = service.options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<AdminReportDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "admin"
)]
pub async fn get_report(
    State(service): State<Arc<ManageReportService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<AdminReportDto>>> {
    let report = service.get(id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// Create a report
#[utoipa::path(
    post,
    path = "/api/admin/reports",
    request_body = UpsertReportDto,
    responses(
        (status = 201, description = "Report created", body = ApiResponse<AdminReportDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Missing or invalid anti-forgery token")
    ),
    tag = "admin"
)]
pub async fn create_report(
    State(service): State<Arc<ManageReportService>>,
    AppJson(dto): AppJson<UpsertReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<AdminReportDto>>)> {
    dto.validate()?;

    let report = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(report))))
}

/// Replace a report
#[utoipa::path(
    put,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpsertReportDto,
    responses(
        (status = 200, description = "Report replaced", body = ApiResponse<AdminReportDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Missing or invalid anti-forgery token"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Report was modified concurrently")
    ),
    tag = "admin"
)]
pub async fn update_report(
    State(service): State<Arc<ManageReportService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpsertReportDto>,
) -> Result<Json<ApiResponse<AdminReportDto>>> {
    dto.validate()?;

    let report = service.update(id, dto).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// Delete a report and its status history
#[utoipa::path(
    delete,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Delete processed", body = ApiResponse<DeletedDto>),
        (status = 403, description = "Missing or invalid anti-forgery token")
    ),
    tag = "admin"
)]
pub async fn delete_report(
    State(service): State<Arc<ManageReportService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let result = service.delete(id).await?;
    Ok(Json(ApiResponse::ok(result)))
}
