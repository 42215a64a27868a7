//! Staff and submitter accounts.
//!
//! Credentials are stored as Argon2id hashes. Deleting a user keeps their
//! reports and reviews; the references are nulled by the store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/users` | Admin | List users |
//! | POST | `/api/admin/users` | Admin | Create a user |
//! | GET | `/api/admin/users/{id}` | Admin | Get a user |
//! | DELETE | `/api/admin/users/{id}` | Admin | Delete a user |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgUserRepository, UserRepository};
pub use services::UserService;
