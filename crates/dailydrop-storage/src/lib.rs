//! # dailydrop-storage
//!
//! Media blob storage for Daily Drop. Submission photos and drop cover
//! images are written through the [`MediaStore`], which namespaces keys
//! and resolves public URLs over a pluggable provider backend (local
//! filesystem or S3).

pub mod media;
pub mod providers;
pub mod upload;

pub use media::MediaStore;
pub use upload::{UploadHandle, UploadOutcome, UploadProgress};
