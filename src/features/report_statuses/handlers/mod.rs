mod report_status_handler;

pub use report_status_handler::*;
