//! User profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user profile mirrored from the external authentication provider.
///
/// The point counter is only ever incremented, atomically, by reward
/// settlement; nothing in this codebase decrements it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier (matches the auth provider's subject id).
    pub id: Uuid,
    /// Display username.
    pub username: String,
    /// Email address.
    pub email: Option<String>,
    /// Accumulated point total.
    pub points: i64,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// The auth provider's subject id.
    pub id: Uuid,
    /// Display username.
    pub username: String,
    /// Email address.
    pub email: Option<String>,
}
