//! Blob store collaborator contract for pluggable media backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading and writing blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for blob storage backends.
///
/// Implementations exist for the local filesystem and S3. The [`BlobStore`]
/// trait is defined here in `dailydrop-core` and implemented in
/// `dailydrop-storage`. Keys are slash-separated paths namespaced by the
/// caller (e.g. `submissions/{drop_id}/...`).
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a blob and return its byte stream.
    async fn read(&self, key: &str) -> AppResult<ByteStream>;

    /// Write bytes to a blob at the given key.
    async fn write(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Write a byte stream to a blob at the given key, returning the
    /// number of bytes written.
    async fn write_stream(&self, key: &str, stream: ByteStream) -> AppResult<u64>;

    /// Delete a blob at the given key. Deleting a missing key is not an
    /// error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a blob exists at the given key.
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
