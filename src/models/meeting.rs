use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming request to create a meeting.
///
/// Mirrors the fields the Zoom meeting-creation endpoint accepts.
/// Text fields may be empty and the duration may be zero; nothing
/// beyond JSON decoding is enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingCreateRequest {
    #[serde(default)]
    pub topic: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub password: String,
    /// Provider-specific settings, passed through to Zoom verbatim.
    /// The shape is provider-defined and open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Meeting data returned by Zoom after creation.
///
/// This is both the response body handed back to the caller and the
/// source of the column subset written to `zoom_meetings`. Fields the
/// provider omits decode to their empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingRecord {
    pub id: i64,
    pub uuid: String,
    pub host_id: String,
    pub join_url: String,
    pub start_url: String,
    pub topic: String,
    pub start_time: String,
    pub duration: i32,
    pub timezone: String,
    pub created_at: String,
    pub password: String,
    pub h323_password: String,
    pub pmi: i64,
    #[serde(rename = "type")]
    pub meeting_type: i32,
    pub status: String,
    pub encrypted_password: String,
    pub settings: Value,
}
