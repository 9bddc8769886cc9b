use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::api::{create_meeting, AppState};
use crate::handlers::test::health_check;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/create-meeting", post(create_meeting))
        .with_state(app_state)
}
