use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use mockall::mock;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::models::meeting::MeetingRecord;
use crate::services::database::{MeetingStore, StoreError};

/// Handle to a fake Zoom API listening on a local port.
pub struct MockProvider {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    auth_header: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Number of meeting-creation calls the fake API received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Authorization header captured from the last call.
    pub fn auth_header(&self) -> Option<String> {
        self.auth_header.lock().unwrap().clone()
    }
}

/// Spawn a fake Zoom API that answers every meeting-creation call
/// with the given status and body.
pub async fn spawn_provider(status: StatusCode, body: String) -> MockProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let auth_header = Arc::new(Mutex::new(None));

    let hits_ref = Arc::clone(&hits);
    let auth_ref = Arc::clone(&auth_header);

    let app = Router::new().route(
        "/v2/users/:user_id/meetings",
        post(move |headers: HeaderMap| {
            let hits = Arc::clone(&hits_ref);
            let auth = Arc::clone(&auth_ref);
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *auth.lock().unwrap() = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(String::from);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake provider");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Fake provider exited");
    });

    MockProvider {
        base_url: format!("http://{}", addr),
        hits,
        auth_header,
    }
}

/// Configuration pointing at the fake provider; credentials are
/// dummies.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        api_key: "test_api_key".to_string(),
        api_secret: "test_api_secret".to_string(),
        api_endpoint: base_url.to_string(),
        api_user_id: "relay-bot".to_string(),
        database_url: "postgres://unused".to_string(),
    }
}

/// Meeting object the fake provider returns on success.
pub fn sample_meeting_json() -> Value {
    json!({
        "id": 123,
        "uuid": "u-1",
        "topic": "Standup",
        "start_time": "2024-01-01T09:00:00Z",
        "duration": 30,
        "join_url": "https://x/1",
        "start_url": "https://x/2",
        "created_at": "2024-01-01T08:59:00Z",
        "password": "abc"
    })
}

/// Request body matching the sample meeting.
pub fn sample_request_json() -> Value {
    json!({
        "topic": "Standup",
        "start_time": "2024-01-01T09:00:00Z",
        "duration": 30,
        "timezone": "UTC",
        "password": "abc"
    })
}

/// In-memory store that records inserted rows.
#[derive(Default)]
pub struct RecordingStore {
    rows: Mutex<Vec<MeetingRecord>>,
}

impl RecordingStore {
    pub fn rows(&self) -> Vec<MeetingRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingStore for RecordingStore {
    async fn insert_meeting(&self, record: &MeetingRecord) -> Result<(), StoreError> {
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl MeetingStore for Store {
        async fn insert_meeting(&self, record: &MeetingRecord) -> Result<(), StoreError>;
    }
}
