use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::{
    COORDINATE_LIMIT, COORDINATE_SCALE, MEASUREMENT_LIMIT, MEASUREMENT_SCALE,
};

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Rejects strings that are empty or whitespace only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Measurement must fit NUMERIC(5,2): at most two decimals, |value| < 1000
pub fn validate_measurement(value: &Decimal) -> Result<(), ValidationError> {
    if value.scale() > MEASUREMENT_SCALE && value.normalize().scale() > MEASUREMENT_SCALE {
        let mut err = ValidationError::new("precision");
        err.message = Some("must have at most 2 decimal places".into());
        return Err(err);
    }
    if value.abs() >= Decimal::from(MEASUREMENT_LIMIT) {
        let mut err = ValidationError::new("range");
        err.message = Some("must be between -999.99 and 999.99".into());
        return Err(err);
    }
    Ok(())
}

/// Coordinate must fit NUMERIC(10,6) once rounded to six places.
/// Geographic range ([-90, 90] / [-180, 180]) is deliberately not checked.
pub fn validate_coordinate(value: &Decimal) -> Result<(), ValidationError> {
    if value.round_dp(COORDINATE_SCALE).abs() >= Decimal::from(COORDINATE_LIMIT) {
        let mut err = ValidationError::new("range");
        err.message = Some("must be between -9999.999999 and 9999.999999".into());
        return Err(err);
    }
    Ok(())
}
