use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::report_statuses::{
    dtos as statuses_dtos, handlers as statuses_handlers, models as statuses_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::features::weather::handlers as weather_handlers;
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports (public map)
        reports_handlers::list_reports,
        reports_handlers::create_report,
        // Weather (public)
        weather_handlers::get_weather,
        // Admin: reports
        admin_handlers::issue_csrf_token,
        admin_handlers::list_reports,
        admin_handlers::report_options,
        admin_handlers::get_report,
        admin_handlers::create_report,
        admin_handlers::update_report,
        admin_handlers::delete_report,
        // Admin: status history
        statuses_handlers::list_report_statuses,
        statuses_handlers::create_report_status,
        // Admin: locations
        locations_handlers::list_locations,
        locations_handlers::get_location,
        locations_handlers::create_location,
        locations_handlers::delete_location,
        // Admin: contacts
        contacts_handlers::list_contacts,
        contacts_handlers::create_contact,
        contacts_handlers::delete_contact,
        // Admin: users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::create_user,
        users_handlers::delete_user,
    ),
    components(
        schemas(
            // Shared
            Meta,
            DeletedDto,
            ApiResponse<DeletedDto>,
            // Reports
            reports_models::ReportType,
            reports_dtos::CreateMapReportDto,
            reports_dtos::ReportMarkerDto,
            // Admin
            admin_dtos::AdminReportDto,
            admin_dtos::UpsertReportDto,
            admin_dtos::ReportOptionsDto,
            admin_dtos::CsrfTokenDto,
            ApiResponse<Vec<admin_dtos::AdminReportDto>>,
            ApiResponse<admin_dtos::AdminReportDto>,
            ApiResponse<admin_dtos::ReportOptionsDto>,
            ApiResponse<admin_dtos::CsrfTokenDto>,
            // Status history
            statuses_models::ReportStatusValue,
            statuses_dtos::CreateReportStatusDto,
            statuses_dtos::ReportStatusResponseDto,
            ApiResponse<Vec<statuses_dtos::ReportStatusResponseDto>>,
            ApiResponse<statuses_dtos::ReportStatusResponseDto>,
            // Locations
            locations_dtos::CreateLocationDto,
            locations_dtos::LocationResponseDto,
            locations_dtos::LocationOptionDto,
            ApiResponse<Vec<locations_dtos::LocationResponseDto>>,
            ApiResponse<locations_dtos::LocationResponseDto>,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactResponseDto,
            ApiResponse<Vec<contacts_dtos::ContactResponseDto>>,
            ApiResponse<contacts_dtos::ContactResponseDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UserResponseDto,
            users_dtos::UserOptionDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
        )
    ),
    tags(
        (name = "reports", description = "Public map: active report markers and click submission"),
        (name = "weather", description = "Current weather lookup (proxied)"),
        (name = "admin", description = "Back-office report management"),
        (name = "report-statuses", description = "Report review history (admin)"),
        (name = "locations", description = "Locations (admin)"),
        (name = "contacts", description = "Non-profit contacts per location (admin)"),
        (name = "users", description = "User accounts (admin)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SentinelWatch API",
        version = "0.1.0",
        description = "API documentation for SentinelWatch",
    )
)]
pub struct ApiDoc;

/// Adds the admin Basic auth and anti-forgery header schemes to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_basic",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
            components.add_security_scheme(
                "csrf_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-CSRF-Token"))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
