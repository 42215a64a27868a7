use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::contacts::models::NonProfitContact;

/// Request DTO for adding a contact to a location
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub contact_email: String,

    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    #[validate(
        url(message = "Website must be a valid URL"),
        length(max = 255, message = "Website must not exceed 255 characters")
    )]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: i64,
    pub location_id: i64,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl From<NonProfitContact> for ContactResponseDto {
    fn from(c: NonProfitContact) -> Self {
        Self {
            id: c.id,
            location_id: c.location_id,
            name: c.name,
            contact_email: c.contact_email,
            phone: c.phone,
            website: c.website,
        }
    }
}
