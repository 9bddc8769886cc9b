use chrono::SecondsFormat;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::auth::ZoomAuth;
use crate::config::AppConfig;
use crate::models::meeting::{MeetingCreateRequest, MeetingRecord};

/// Errors from talking to the Zoom API
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to call Zoom API: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Zoom API returned status {status}")]
    UnexpectedStatus { status: StatusCode, body: Value },
    #[error("failed to parse Zoom API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the Zoom Meetings API
pub struct ZoomClient {
    client: Client,
    api_key: String,
    api_secret: String,
    endpoint: String,
    user_id: String,
}

impl ZoomClient {
    /// Create a new Zoom client from the process configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            endpoint: config.api_endpoint.clone(),
            user_id: config.api_user_id.clone(),
        }
    }

    /// Create a meeting through the Zoom API
    ///
    /// Returns the meeting object Zoom responds with. Any status
    /// other than 201 Created is treated as a failure; the error body
    /// is decoded best-effort so it can be logged.
    pub async fn create_meeting(
        &self,
        request: &MeetingCreateRequest,
    ) -> Result<MeetingRecord, ClientError> {
        let url = format!("{}/v2/users/{}/meetings", self.endpoint, self.user_id);

        let mut payload = json!({
            "topic": request.topic,
            "start_time": request
                .start_time
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            "duration": request.duration,
            "timezone": request.timezone,
            "password": request.password,
        });
        if let Some(settings) = &request.settings {
            payload["settings"] = settings.clone();
        }

        let token = ZoomAuth::generate_jwt(&self.api_key, &self.api_secret);

        info!("Making request to create meeting: {}", request.topic);
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        info!("Response received with status: {}", status);

        if status != StatusCode::CREATED {
            let body = res.json::<Value>().await.unwrap_or(Value::Null);
            error!("Zoom API error: status {}, response: {}", status, body);
            return Err(ClientError::UnexpectedStatus { status, body });
        }

        res.json::<MeetingRecord>()
            .await
            .map_err(ClientError::Decode)
    }
}
