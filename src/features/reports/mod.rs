//! Incident reports and the public map endpoints.
//!
//! A map click becomes a fresh `Location` plus an active `Emergency` report,
//! both written in one transaction. The marker feed only ever shows active
//! reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/reports` | None | Markers for all active reports |
//! | POST | `/api/reports` | None | Submit a report from a map click |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgReportRepository, ReportRepository};
pub use services::ReportService;
