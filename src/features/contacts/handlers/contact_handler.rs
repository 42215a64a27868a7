use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contacts::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contacts::services::ContactService;
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

/// List non-profit contacts of a location
#[utoipa::path(
    get,
    path = "/api/admin/locations/{id}/contacts",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Contacts of the location", body = ApiResponse<Vec<ContactResponseDto>>),
        (status = 404, description = "Location not found")
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
    Path(location_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let contacts = service.list_for_location(location_id).await?;
    let total = contacts.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(contacts),
        None,
        Some(Meta { total }),
    )))
}

/// Add a non-profit contact to a location
#[utoipa::path(
    post,
    path = "/api/admin/locations/{id}/contacts",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    Path(location_id): Path<i64>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponseDto>>)> {
    dto.validate()?;

    let contact = service.create(location_id, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(contact))))
}

/// Delete a contact
#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    params(
        ("id" = i64, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Delete processed", body = ApiResponse<DeletedDto>)
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(service): State<Arc<ContactService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let result = service.delete(id).await?;
    Ok(Json(ApiResponse::ok(result)))
}
