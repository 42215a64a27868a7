use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::weather::dtos::WeatherQuery;
use crate::features::weather::services::WeatherService;

/// Current weather at a point, relayed from the provider
#[utoipa::path(
    get,
    path = "/api/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Provider weather document", content_type = "application/json"),
        (status = 400, description = "Non-numeric coordinates"),
        (status = 500, description = "Provider unreachable or response unreadable")
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(service): State<Arc<WeatherService>>,
    AppQuery(query): AppQuery<WeatherQuery>,
) -> Result<Json<serde_json::Value>> {
    let weather = service.fetch_current(query.lat, query.lon).await?;
    Ok(Json(weather))
}
