//! Review history of a report.
//!
//! Each entry records a moderation decision; the newest entry is the
//! current status. Entries are removed together with their report.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/reports/{id}/statuses` | Admin | Status history of a report |
//! | POST | `/api/admin/reports/{id}/statuses` | Admin | Record a review decision |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgReportStatusRepository, ReportStatusRepository};
pub use services::ReportStatusService;
