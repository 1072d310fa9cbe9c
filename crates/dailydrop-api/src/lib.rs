//! # dailydrop-api
//!
//! HTTP API layer for Daily Drop built on Axum.
//!
//! Provides the REST endpoints for the capture workflow, submission
//! review, drop and reward administration, the leaderboard, user
//! profiles, and public media, plus DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
