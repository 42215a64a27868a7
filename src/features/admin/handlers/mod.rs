mod admin_handlers;
mod csrf_handler;

pub use admin_handlers::*;
pub use csrf_handler::*;
