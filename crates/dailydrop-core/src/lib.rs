//! Core building blocks shared by every Daily Drop crate.
//!
//! Holds the unified error type, the configuration schemas, the validated
//! geographic point type, and the blob-store collaborator contract. Nothing
//! in this crate talks to the network or the database.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
