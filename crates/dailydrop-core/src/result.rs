//! Application result alias.

use crate::error::AppError;

/// Result alias used across all Daily Drop crates.
pub type AppResult<T> = Result<T, AppError>;
