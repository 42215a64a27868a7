//! Named geographic points that reports and relief contacts hang off.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/locations` | Admin | List locations |
//! | POST | `/api/admin/locations` | Admin | Create a location |
//! | GET | `/api/admin/locations/{id}` | Admin | Get a location |
//! | DELETE | `/api/admin/locations/{id}` | Admin | Delete a location with its reports and contacts |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{LocationRepository, PgLocationRepository};
pub use services::LocationService;
