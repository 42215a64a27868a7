use sqlx::FromRow;

/// Database model for a non-profit contact
#[derive(Debug, Clone, FromRow)]
pub struct NonProfitContact {
    pub id: i64,
    pub location_id: i64,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateContact {
    pub location_id: i64,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}
