//! Media store facade over the configured blob provider.
//!
//! Owns key derivation and public URL resolution so callers never
//! hand-build storage paths.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use dailydrop_core::config::StorageConfig;
use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_core::traits::blob::{BlobStore, ByteStream};

use crate::providers::LocalBlobStore;

/// Facade for all media blob operations.
#[derive(Debug, Clone)]
pub struct MediaStore {
    blobs: Arc<dyn BlobStore>,
    public_base_url: String,
}

impl MediaStore {
    /// Build a media store from configuration, selecting the provider
    /// backend by name.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let blobs: Arc<dyn BlobStore> = match config.provider.as_str() {
            "local" => Arc::new(LocalBlobStore::new(&config.local.root_path).await?),
            #[cfg(feature = "s3")]
            "s3" => Arc::new(
                crate::providers::S3BlobStore::new(
                    &config.s3.endpoint,
                    &config.s3.region,
                    &config.s3.bucket,
                )
                .await?,
            ),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: {other}"
                )));
            }
        };

        Ok(Self::new(blobs, &config.public_base_url))
    }

    /// Wrap an existing blob store.
    pub fn new(blobs: Arc<dyn BlobStore>, public_base_url: &str) -> Self {
        Self {
            blobs,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The underlying blob store.
    pub fn blobs(&self) -> Arc<dyn BlobStore> {
        Arc::clone(&self.blobs)
    }

    /// Derive the storage key for a submission photo.
    pub fn submission_key(
        drop_id: Uuid,
        user_id: Uuid,
        uploaded_at: DateTime<Utc>,
        extension: &str,
    ) -> String {
        format!(
            "submissions/{drop_id}/{user_id}-{drop_id}-{}.{extension}",
            uploaded_at.timestamp_millis()
        )
    }

    /// Derive the storage key for a drop cover image.
    pub fn drop_image_key(image_id: Uuid, extension: &str) -> String {
        format!("drops/{image_id}.{extension}")
    }

    /// Resolve the public URL for a stored key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }

    /// Check provider health.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.blobs.health_check().await
    }

    /// Read a blob as a byte stream.
    pub async fn read(&self, key: &str) -> AppResult<ByteStream> {
        self.blobs.read(key).await
    }

    /// Write a fully buffered blob.
    pub async fn write(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.blobs.write(key, data).await
    }

    /// Delete a blob. Missing keys are not an error.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        self.blobs.delete(key).await
    }
}

/// Map a supported image MIME type to a file extension.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_key_embeds_user_drop_and_timestamp() {
        let drop_id = Uuid::nil();
        let user_id = Uuid::max();
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let key = MediaStore::submission_key(drop_id, user_id, at, "jpg");
        assert_eq!(
            key,
            format!("submissions/{drop_id}/{user_id}-{drop_id}-1700000000000.jpg")
        );
    }

    #[test]
    fn drop_image_key_is_namespaced() {
        let id = Uuid::nil();
        assert_eq!(
            MediaStore::drop_image_key(id, "png"),
            format!("drops/{id}.png")
        );
    }

    #[tokio::test]
    async fn public_url_joins_without_double_slash() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(
            Arc::new(
                LocalBlobStore::new(dir.path().to_str().unwrap())
                    .await
                    .unwrap(),
            ),
            "http://localhost:8080/media/",
        );
        assert_eq!(
            store.public_url("/drops/x.png"),
            "http://localhost:8080/media/drops/x.png"
        );
    }

    #[test]
    fn extension_mapping_rejects_non_images() {
        assert_eq!(extension_for_mime("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_mime("application/pdf"), None);
    }
}
