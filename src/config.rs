use dotenv::dotenv;
use std::env;

/// Process configuration for the relay service.
///
/// Loaded once at startup and handed to the pieces that need it, so
/// tests can construct one directly instead of mutating the process
/// environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Zoom API key, carried as the issuer claim of generated tokens.
    pub api_key: String,
    /// Zoom API secret, the token signing key.
    pub api_secret: String,
    /// Base URL of the Zoom API.
    pub api_endpoint: String,
    /// User the meetings are created under. Zoom accepts "me" as an
    /// alias for the token owner.
    pub api_user_id: String,
    /// Postgres connection string.
    pub database_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables, honoring a
    /// `.env` file if present.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_key: env::var("ZOOM_API_KEY").expect("ZOOM_API_KEY must be set in environment"),
            api_secret: env::var("ZOOM_API_SECRET")
                .expect("ZOOM_API_SECRET must be set in environment"),
            api_endpoint: env::var("ZOOM_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api.zoom.us".to_string()),
            api_user_id: env::var("ZOOM_USER_ID").unwrap_or_else(|_| "me".to_string()),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in environment"),
        }
    }
}
