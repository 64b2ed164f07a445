//! Backend API constants.

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Collection endpoint for secret requests (GET lists, POST creates).
pub const SECRET_REQUESTS_PATH: &str = "/api/secret-requests";

/// Backend liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

