use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::models::meeting::MeetingRecord;

/// Errors from the meeting store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for meetings created through the relay
#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// Insert one row for a meeting the provider confirmed.
    async fn insert_meeting(&self, record: &MeetingRecord) -> Result<(), StoreError>;
}

/// Postgres-backed meeting store holding the shared connection pool
pub struct PgMeetingStore {
    pool: PgPool,
}

impl PgMeetingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to Postgres and set up the connection pool
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        info!("Connected to Postgres");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl MeetingStore for PgMeetingStore {
    async fn insert_meeting(&self, record: &MeetingRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO zoom_meetings \
             (zoom_meeting_id, topic, start_time, duration, join_url, start_url, created_at, password) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(record.id)
        .bind(&record.topic)
        .bind(&record.start_time)
        .bind(record.duration)
        .bind(&record.join_url)
        .bind(&record.start_url)
        .bind(&record.created_at)
        .bind(&record.password)
        .execute(&self.pool)
        .await?;

        info!("Stored meeting record with ID {}", record.id);

        Ok(())
    }
}
