pub mod admin;
pub mod contacts;
pub mod locations;
pub mod report_statuses;
pub mod reports;
pub mod users;
pub mod weather;
