use reqwest::StatusCode;

use crate::core::config::WeatherConfig;
use crate::core::error::{AppError, Result};

/// Client for the OpenWeatherMap current-weather endpoint
pub struct WeatherService {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherService {
    pub fn new(client: reqwest::Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    fn current_weather_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/weather?lat={}&lon={}&appid={}&units={}",
            self.config.base_url,
            lat,
            lon,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.units)
        )
    }

    /// Fetch current conditions and return the provider's JSON as-is
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<serde_json::Value> {
        tracing::debug!("Fetching weather: lat={}, lon={}", lat, lon);

        let response = self
            .client
            .get(self.current_weather_url(lat, lon))
            .send()
            .await
            .map_err(|e| {
                AppError::Internal(format!("Weather request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather provider returned {}: {}", status, body);
            return Err(AppError::Upstream {
                status: relay_status(status),
                message: format!(
                    "Error fetching weather data: {}",
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse weather response: {}", e.without_url()))
        })
    }
}

/// Map the provider status onto an error status axum can send.
/// Informational and redirect codes are not errors from the caller's view.
fn relay_status(status: StatusCode) -> axum::http::StatusCode {
    axum::http::StatusCode::from_u16(status.as_u16())
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(axum::http::StatusCode::BAD_GATEWAY)
}
