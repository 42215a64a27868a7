//! Back-office report management.
//!
//! Full-record CRUD over reports plus the selection lists the report forms
//! need. Replacing a report is guarded by its `row_version`, so an editor
//! working from a stale copy gets a conflict instead of silently
//! overwriting someone else's change.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/csrf-token` | Admin | Issue an anti-forgery token |
//! | GET | `/api/admin/reports` | Admin | List reports (paginated) |
//! | GET | `/api/admin/reports/options` | Admin | Location/user/type selection lists |
//! | GET | `/api/admin/reports/{id}` | Admin | Get a report |
//! | POST | `/api/admin/reports` | Admin | Create a report |
//! | PUT | `/api/admin/reports/{id}` | Admin | Replace a report |
//! | DELETE | `/api/admin/reports/{id}` | Admin | Delete a report |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ManageReportService;
