use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Admin routes for locations, nested under `/api/admin` by the caller
pub fn admin_routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route(
            "/locations",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route(
            "/locations/{id}",
            get(handlers::get_location).delete(handlers::delete_location),
        )
        .with_state(service)
}
