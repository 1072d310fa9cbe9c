//! Background media upload task with progress reporting and cancellation.
//!
//! An upload runs as a spawned task that drives the request byte stream
//! into the blob store. Observers watch byte-level progress through a
//! watch channel; cancelling the handle stops the stream at the next
//! chunk boundary and removes the partially written object.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_core::traits::blob::{BlobStore, ByteStream};

/// Byte-level progress of a running upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes written so far.
    pub bytes_transferred: u64,
    /// Declared total size, when the request carried one.
    pub total_bytes: Option<u64>,
}

/// Terminal state of an upload task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The full stream was written.
    Completed {
        /// Total bytes written to the blob store.
        bytes_written: u64,
    },
    /// The upload was cancelled and the partial object removed.
    Cancelled,
}

/// Handle to a running upload task.
#[derive(Debug)]
pub struct UploadHandle {
    progress: watch::Receiver<UploadProgress>,
    cancel: CancellationToken,
    task: JoinHandle<AppResult<UploadOutcome>>,
}

impl UploadHandle {
    /// Subscribe to progress updates.
    pub fn progress(&self) -> watch::Receiver<UploadProgress> {
        self.progress.clone()
    }

    /// Request cancellation. Takes effect at the next chunk boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the upload to finish.
    pub async fn join(self) -> AppResult<UploadOutcome> {
        self.task
            .await
            .map_err(|e| AppError::internal(format!("Upload task panicked: {e}")))?
    }
}

/// Spawn an upload of `stream` to `key` on the given blob store.
pub fn start_upload(
    blobs: Arc<dyn BlobStore>,
    key: String,
    stream: ByteStream,
    total_bytes: Option<u64>,
) -> UploadHandle {
    let (tx, rx) = watch::channel(UploadProgress {
        bytes_transferred: 0,
        total_bytes,
    });
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        let mut transferred = 0u64;
        let counting = stream.map(move |chunk| {
            if let Ok(bytes) = &chunk {
                transferred += bytes.len() as u64;
                tx.send_replace(UploadProgress {
                    bytes_transferred: transferred,
                    total_bytes,
                });
            }
            chunk
        });
        // The cancellation token ends the stream at a chunk boundary;
        // write_stream then returns normally with a partial object.
        let gated: ByteStream = Box::pin(counting.take_until(token.clone().cancelled_owned()));

        let bytes_written = blobs.write_stream(&key, gated).await?;

        if token.is_cancelled() {
            info!(key, bytes_written, "Upload cancelled, removing partial object");
            blobs.delete(&key).await?;
            return Ok(UploadOutcome::Cancelled);
        }

        debug!(key, bytes_written, "Upload completed");
        Ok(UploadOutcome::Completed { bytes_written })
    });

    UploadHandle {
        progress: rx,
        cancel,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;

    use crate::providers::LocalBlobStore;

    fn chunks(parts: &[&'static [u8]]) -> ByteStream {
        let items: Vec<Result<Bytes, std::io::Error>> = parts
            .iter()
            .map(|p| Ok(Bytes::from_static(p)))
            .collect();
        Box::pin(futures::stream::iter(items))
    }

    #[tokio::test]
    async fn upload_completes_and_reports_progress() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new(dir.path().to_str().unwrap())
                .await
                .unwrap(),
        );

        let handle = start_upload(
            Arc::clone(&store),
            "submissions/d/photo.jpg".into(),
            chunks(&[b"abc", b"defg"]),
            Some(7),
        );
        let progress = handle.progress();

        let outcome = handle.join().await.unwrap();
        assert_eq!(outcome, UploadOutcome::Completed { bytes_written: 7 });
        assert_eq!(progress.borrow().bytes_transferred, 7);
        assert_eq!(progress.borrow().total_bytes, Some(7));
        assert!(store.exists("submissions/d/photo.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn cancelled_upload_removes_partial_object() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new(dir.path().to_str().unwrap())
                .await
                .unwrap(),
        );

        // First chunk arrives, then the stream stalls forever.
        let stalled: ByteStream = Box::pin(
            futures::stream::iter(vec![Ok(Bytes::from_static(b"partial"))])
                .chain(futures::stream::pending()),
        );

        let handle = start_upload(
            Arc::clone(&store),
            "submissions/d/stalled.jpg".into(),
            stalled,
            None,
        );

        let mut progress = handle.progress();
        progress
            .wait_for(|p| p.bytes_transferred > 0)
            .await
            .unwrap();

        handle.cancel();
        let outcome = handle.join().await.unwrap();
        assert_eq!(outcome, UploadOutcome::Cancelled);
        assert!(!store.exists("submissions/d/stalled.jpg").await.unwrap());
    }
}
