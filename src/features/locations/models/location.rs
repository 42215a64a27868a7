use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for location
#[derive(Debug, Clone, FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub country: String,
}

/// Data for creating a new location
#[derive(Debug, Clone)]
pub struct CreateLocation {
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub country: String,
}
