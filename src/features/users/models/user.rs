use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub join_date: DateTime<Utc>,
}

/// Data for creating a new user; the password is already hashed
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
