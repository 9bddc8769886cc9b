//! Zoom Meeting Relay Service
//!
//! This library provides a Rust client for the Zoom Meetings API
//! and a web service that relays meeting-creation requests to Zoom
//! and records the created meetings in Postgres.
//!
//! # Modules
//!
//! - `client`: ZoomClient for API operations
//! - `auth`: Authentication utilities for the Zoom API
//! - `handlers`: HTTP endpoint implementations
//! - `services`: Meeting storage backed by Postgres
//!
//! # Authentication
//!
//! The library authenticates against the Zoom API with HS256 JWTs
//! signed with the account's API secret, as required by Zoom's JWT
//! app type. The token construction is encapsulated in the `auth`
//! module.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

// Re-export the main API types for ease of use
pub use auth::ZoomAuth;
pub use client::ZoomClient;
pub use config::AppConfig;
pub use handlers::api::AppState;
pub use routes::create_router;
