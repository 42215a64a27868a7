use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::report_statuses::handlers;
use crate::features::report_statuses::services::ReportStatusService;

/// Admin routes for report status history, nested under `/api/admin` by the caller
pub fn admin_routes(service: Arc<ReportStatusService>) -> Router {
    Router::new()
        .route(
            "/reports/{id}/statuses",
            get(handlers::list_report_statuses).post(handlers::create_report_status),
        )
        .with_state(service)
}
