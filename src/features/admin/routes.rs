use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::ManageReportService;

/// Admin routes for report management, nested under `/api/admin` by the caller
pub fn routes(service: Arc<ManageReportService>) -> Router {
    Router::new()
        .route("/csrf-token", get(handlers::issue_csrf_token))
        .route(
            "/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route("/reports/options", get(handlers::report_options))
        .route(
            "/reports/{id}",
            get(handlers::get_report)
                .put(handlers::update_report)
                .delete(handlers::delete_report),
        )
        .with_state(service)
}
