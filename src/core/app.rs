use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Router,
};
use sqlx::PgPool;

use crate::core::config::IngestionConfig;
use crate::core::middleware;
use crate::features::admin::{routes as admin_routes, ManageReportService};
use crate::features::contacts::{
    routes as contacts_routes, ContactRepository, ContactService, PgContactRepository,
};
use crate::features::locations::{
    routes as locations_routes, LocationRepository, LocationService, PgLocationRepository,
};
use crate::features::report_statuses::{
    routes as report_statuses_routes, PgReportStatusRepository, ReportStatusRepository,
    ReportStatusService,
};
use crate::features::reports::{
    routes as reports_routes, PgReportRepository, ReportRepository, ReportService,
};
use crate::features::users::{
    routes as users_routes, PgUserRepository, UserRepository, UserService,
};
use crate::features::weather::{routes as weather_routes, WeatherService};

/// Storage backends for every feature
pub struct Repositories {
    pub reports: Arc<dyn ReportRepository>,
    pub report_statuses: Arc<dyn ReportStatusRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            reports: Arc::new(PgReportRepository::new(pool.clone())),
            report_statuses: Arc::new(PgReportStatusRepository::new(pool.clone())),
            locations: Arc::new(PgLocationRepository::new(pool.clone())),
            contacts: Arc::new(PgContactRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
        }
    }
}

/// Shared service instances handed to the routers
pub struct AppServices {
    pub reports: Arc<ReportService>,
    pub weather: Arc<WeatherService>,
    pub manage_reports: Arc<ManageReportService>,
    pub report_statuses: Arc<ReportStatusService>,
    pub locations: Arc<LocationService>,
    pub contacts: Arc<ContactService>,
    pub users: Arc<UserService>,
}

impl AppServices {
    pub fn new(repos: Repositories, ingestion: IngestionConfig, weather: WeatherService) -> Self {
        Self {
            reports: Arc::new(ReportService::new(Arc::clone(&repos.reports), ingestion)),
            weather: Arc::new(weather),
            manage_reports: Arc::new(ManageReportService::new(
                Arc::clone(&repos.reports),
                Arc::clone(&repos.locations),
                Arc::clone(&repos.users),
            )),
            report_statuses: Arc::new(ReportStatusService::new(
                Arc::clone(&repos.report_statuses),
                Arc::clone(&repos.reports),
                Arc::clone(&repos.users),
            )),
            locations: Arc::new(LocationService::new(Arc::clone(&repos.locations))),
            contacts: Arc::new(ContactService::new(
                Arc::clone(&repos.contacts),
                Arc::clone(&repos.locations),
            )),
            users: Arc::new(UserService::new(Arc::clone(&repos.users))),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes: public map endpoints, weather proxy, health, and the admin
/// area under `/api/admin`.
///
/// Admin routes always require the anti-forgery token on state-changing
/// requests; Basic auth is added when `admin_credentials` is set.
pub fn build_router(
    services: &AppServices,
    admin_credentials: Option<String>,
    max_body_size: usize,
) -> Router {
    let mut admin = Router::new()
        .merge(admin_routes::routes(Arc::clone(&services.manage_reports)))
        .merge(report_statuses_routes::admin_routes(Arc::clone(
            &services.report_statuses,
        )))
        .merge(locations_routes::admin_routes(Arc::clone(&services.locations)))
        .merge(contacts_routes::admin_routes(Arc::clone(&services.contacts)))
        .merge(users_routes::admin_routes(Arc::clone(&services.users)))
        .layer(from_fn(middleware::csrf_middleware));

    if let Some(credentials) = admin_credentials {
        tracing::info!("Admin basic auth enabled");
        admin = admin.layer(from_fn(middleware::basic_auth_middleware(
            Arc::new(credentials),
            "Admin",
        )));
    } else {
        tracing::warn!("Admin basic auth disabled (no credentials configured)");
    }

    Router::new()
        .merge(reports_routes::routes(Arc::clone(&services.reports)))
        .merge(weather_routes::routes(Arc::clone(&services.weather)))
        .nest("/api/admin", admin)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body_size))
}
