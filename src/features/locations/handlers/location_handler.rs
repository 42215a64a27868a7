use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

/// List all locations
#[utoipa::path(
    get,
    path = "/api/admin/locations",
    responses(
        (status = 200, description = "List of locations", body = ApiResponse<Vec<LocationResponseDto>>)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let locations = service.list().await?;
    let total = locations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(locations),
        None,
        Some(Meta { total }),
    )))
}

/// Get location by ID
#[utoipa::path(
    get,
    path = "/api/admin/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = ApiResponse<LocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let location = service.get(id).await?;
    Ok(Json(ApiResponse::ok(location)))
}

/// Create a location
#[utoipa::path(
    post,
    path = "/api/admin/locations",
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<CreateLocationDto>,
) -> Result<(StatusCode, Json<ApiResponse<LocationResponseDto>>)> {
    dto.validate()?;

    let location = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(location))))
}

/// Delete a location together with its reports and contacts
#[utoipa::path(
    delete,
    path = "/api/admin/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Delete processed", body = ApiResponse<DeletedDto>)
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let result = service.delete(id).await?;
    Ok(Json(ApiResponse::ok(result)))
}
