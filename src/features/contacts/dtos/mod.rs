mod contact_dto;

pub use contact_dto::{ContactResponseDto, CreateContactDto};
