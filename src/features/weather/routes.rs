use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::weather::handlers;
use crate::features::weather::services::WeatherService;

pub fn routes(service: Arc<WeatherService>) -> Router {
    Router::new()
        .route("/api/weather", get(handlers::get_weather))
        .with_state(service)
}
