use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::client::ZoomClient;
use crate::error::ApiError;
use crate::models::meeting::{MeetingCreateRequest, MeetingRecord};
use crate::services::database::MeetingStore;

// AppState struct containing shared resources
pub struct AppState {
    pub client: ZoomClient,
    pub store: Arc<dyn MeetingStore>,
}

// Create meeting endpoint
//
// Relays the request to Zoom and records the created meeting. The row
// insert only runs after Zoom confirmed the meeting, so a failed
// insert leaves a provider meeting with no local record.
pub async fn create_meeting(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MeetingRecord>, ApiError> {
    let request: MeetingCreateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            error!("Failed to decode meeting request: {}", err);
            return Err(ApiError::InvalidBody);
        }
    };

    info!("Received request to create meeting: {}", request.topic);

    let record = match state.client.create_meeting(&request).await {
        Ok(record) => record,
        Err(err) => {
            error!("Failed to create meeting: {}", err);
            return Err(ApiError::Provider);
        }
    };

    if let Err(err) = state.store.insert_meeting(&record).await {
        error!("Failed to save meeting to database: {}", err);
        return Err(ApiError::Storage);
    }

    info!("Successfully created meeting {}", record.id);

    Ok(Json(record))
}
