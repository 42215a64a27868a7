//! Non-profit organisations reachable for a location.
//!
//! Contacts belong to exactly one location and are removed with it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/locations/{id}/contacts` | Admin | List contacts of a location |
//! | POST | `/api/admin/locations/{id}/contacts` | Admin | Add a contact to a location |
//! | DELETE | `/api/admin/contacts/{id}` | Admin | Delete a contact |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{ContactRepository, PgContactRepository};
pub use services::ContactService;
