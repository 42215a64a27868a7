/// Default page size for admin listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Decimal places stored for latitude/longitude (NUMERIC(10,6))
pub const COORDINATE_SCALE: u32 = 6;

/// Coordinates must stay strictly below this magnitude to fit NUMERIC(10,6)
pub const COORDINATE_LIMIT: i64 = 10_000;

/// Decimal places stored for report measurements (NUMERIC(5,2))
pub const MEASUREMENT_SCALE: u32 = 2;

/// Measurements must stay strictly below this magnitude to fit NUMERIC(5,2)
pub const MEASUREMENT_LIMIT: i64 = 1000;

/// Cookie and header carrying the admin anti-forgery token
pub const CSRF_COOKIE_NAME: &str = "csrf_token";
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";
