use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the weather lookup; an omitted coordinate is 0
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct WeatherQuery {
    /// Latitude in decimal degrees
    #[serde(default)]
    pub lat: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub lon: f64,
}
