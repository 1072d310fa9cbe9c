//! S3-compatible blob store (requires the `s3` feature).

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream as S3ByteStream;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio_util::io::ReaderStream;

use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_core::traits::blob::{BlobStore, ByteStream};

/// Blob store backed by an S3-compatible object store.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store against the given endpoint and bucket.
    ///
    /// Credentials are resolved from the ambient AWS environment
    /// (environment variables, shared config, instance metadata).
    pub async fn new(endpoint: &str, region: &str, bucket: &str) -> AppResult<Self> {
        tracing::info!(endpoint, region, bucket, "Initializing S3 blob store");

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));
        if !endpoint.is_empty() {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        Ok(Self {
            client: Client::new(&config),
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let result = self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await;
        Ok(result.is_ok())
    }

    async fn read(&self, key: &str) -> AppResult<ByteStream> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    AppError::not_found(format!("Media not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to read media: {key}"),
                        service_err,
                    )
                }
            })?;

        let stream = ReaderStream::new(object.body.into_async_read());
        Ok(Box::pin(stream))
    }

    async fn write(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(S3ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to write media: {key}"),
                    e.into_service_error(),
                )
            })?;
        Ok(())
    }

    async fn write_stream(&self, key: &str, mut stream: ByteStream) -> AppResult<u64> {
        // The SDK's streaming body needs a known length, so buffer the
        // stream first. Uploads are capped well below memory limits.
        let mut buf = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| AppError::with_source(ErrorKind::Storage, "Stream read error", e))?;
            buf.extend_from_slice(&chunk);
        }
        let total = buf.len() as u64;
        self.write(key, Bytes::from(buf)).await?;
        Ok(total)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete media: {key}"),
                    e.into_service_error(),
                )
            })?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to check media: {key}"),
                        service_err,
                    ))
                }
            }
        }
    }
}
