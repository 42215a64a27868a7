use axum::{response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::features::admin::dtos::CsrfTokenDto;
use crate::shared::constants::CSRF_COOKIE_NAME;
use crate::shared::types::ApiResponse;

/// Issue an anti-forgery token for the admin area
///
/// The token is set as the `csrf_token` cookie and returned in the body;
/// state-changing admin requests must echo it in `X-CSRF-Token`.
#[utoipa::path(
    get,
    path = "/api/admin/csrf-token",
    responses(
        (status = 200, description = "Token issued", body = ApiResponse<CsrfTokenDto>)
    ),
    tag = "admin"
)]
pub async fn issue_csrf_token(jar: CookieJar) -> impl IntoResponse {
    let token = uuid::Uuid::new_v4().simple().to_string();

    let cookie = Cookie::build((CSRF_COOKIE_NAME, token.clone()))
        .path("/api/admin")
        .http_only(true)
        .same_site(SameSite::Strict);

    (
        jar.add(cookie),
        Json(ApiResponse::ok(CsrfTokenDto { token })),
    )
}
