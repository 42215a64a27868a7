use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::models::Location;

/// Request DTO for creating a location
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLocationDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub name: String,

    /// Decimal degrees; numbers and numeric strings are both accepted
    #[validate(custom(function = "crate::shared::validation::validate_coordinate"))]
    #[schema(value_type = f64)]
    pub latitude: Decimal,

    #[validate(custom(function = "crate::shared::validation::validate_coordinate"))]
    #[schema(value_type = f64)]
    pub longitude: Decimal,

    #[validate(length(min = 1, max = 100, message = "Country must be 1-100 characters"))]
    pub country: String,
}

/// Response DTO for location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub longitude: Decimal,
    pub country: String,
}

impl From<Location> for LocationResponseDto {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            name: l.name,
            latitude: l.latitude,
            longitude: l.longitude,
            country: l.country,
        }
    }
}

/// Entry for the location selection list on the report forms
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationOptionDto {
    pub id: i64,
    pub name: String,
}

impl From<Location> for LocationOptionDto {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            name: l.name,
        }
    }
}
