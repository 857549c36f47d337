//! Storage abstraction trait

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Streamed file content, yielded in chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Storage abstraction for uploaded files.
///
/// Filenames are the server-generated storage names and must not contain path
/// separators or `..` components; backends reject anything else with
/// `InvalidFilename`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `data` under `filename` and return the absolute path it was
    /// written to. The write is durable (flushed to disk) when this returns.
    async fn store(&self, filename: &str, data: &[u8]) -> StorageResult<PathBuf>;

    /// Open the file for streamed reading. `NotFound` if it does not exist.
    async fn read_stream(&self, filename: &str) -> StorageResult<ByteStream>;

    /// Remove the file. Absence is not an error; removing a missing file
    /// succeeds so deletes stay idempotent.
    async fn remove(&self, filename: &str) -> StorageResult<()>;

    /// Whether the backing file currently exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;
}
