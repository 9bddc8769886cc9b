use base64::engine::{general_purpose, Engine};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tracing::debug;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Authentication utilities for the Zoom API
pub struct ZoomAuth;

impl ZoomAuth {
    /// Lifetime of generated tokens in minutes
    const TOKEN_LIFETIME_MINUTES: i64 = 120;

    /// Expiry timestamp for a freshly issued token
    fn expiry_timestamp() -> i64 {
        (Utc::now() + Duration::minutes(Self::TOKEN_LIFETIME_MINUTES)).timestamp()
    }

    /// Generate an HS256 JWT for Zoom API requests
    ///
    /// The API key is carried as the `iss` claim and the API secret
    /// is the HMAC signing key, per Zoom's JWT app authentication.
    pub fn generate_jwt(api_key: &str, api_secret: &str) -> String {
        let header = json!({"alg": "HS256", "typ": "JWT"}).to_string();
        let claims = json!({"iss": api_key, "exp": Self::expiry_timestamp()}).to_string();

        let signing_input = format!(
            "{}.{}",
            general_purpose::URL_SAFE_NO_PAD.encode(header.as_bytes()),
            general_purpose::URL_SAFE_NO_PAD.encode(claims.as_bytes())
        );

        debug!("Token signing input: {}", signing_input);

        let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());

        let signature = general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", signing_input, signature)
    }
}
