//! Current-weather lookup for map markers.
//!
//! Thin proxy in front of the OpenWeatherMap `weather` endpoint. The
//! provider's JSON is relayed untouched; its error statuses are relayed too.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/weather?lat=&lon=` | None | Current conditions at a point |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::WeatherService;
