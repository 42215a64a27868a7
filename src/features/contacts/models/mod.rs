mod contact;

pub use contact::{CreateContact, NonProfitContact};
