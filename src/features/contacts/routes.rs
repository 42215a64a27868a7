use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Admin routes for contacts, nested under `/api/admin` by the caller
pub fn admin_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/locations/{id}/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/contacts/{id}", delete(handlers::delete_contact))
        .with_state(service)
}
