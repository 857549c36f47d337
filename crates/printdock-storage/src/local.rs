use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

/// Local filesystem storage rooted at the configured upload directory.
///
/// All files live flat under the root, keyed by the generated storage filename.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the upload directory if it
    /// does not exist yet.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to create upload directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a storage filename to a path under the upload directory.
    ///
    /// Filenames are server-generated, so anything that could traverse out of
    /// the directory is rejected outright rather than canonicalized.
    fn file_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store(&self, filename: &str, data: &[u8]) -> StorageResult<PathBuf> {
        let path = self.file_path(filename)?;
        let start = std::time::Instant::now();

        let write_result: Result<(), std::io::Error> = async {
            let mut file = fs::File::create(&path).await?;
            file.write_all(data).await?;
            file.sync_all().await?;
            Ok(())
        }
        .await;

        if let Err(e) = write_result {
            // Clean up any partially written bytes; the caller only sees the
            // original failure.
            if let Err(cleanup_err) = fs::remove_file(&path).await {
                if cleanup_err.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(
                        path = %path.display(),
                        error = %cleanup_err,
                        "Failed to remove partially written file"
                    );
                }
            }
            return Err(StorageError::WriteFailed(format!(
                "Failed to write file {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Stored uploaded file"
        );

        Ok(path)
    }

    async fn read_stream(&self, filename: &str) -> StorageResult<ByteStream> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let stream = ReaderStream::new(file).map(|chunk| chunk.map_err(StorageError::Io));
        Ok(Box::pin(stream))
    }

    async fn remove(&self, filename: &str) -> StorageResult<()> {
        let path = self.file_path(filename)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Removed stored file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to remove file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.file_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn storage() -> (TempDir, LocalStorage) {
        let dir = TempDir::new().expect("temp dir");
        let storage = LocalStorage::new(dir.path()).await.expect("storage");
        (dir, storage)
    }

    async fn collect(mut stream: ByteStream) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(chunk) = stream.next().await {
            out.extend_from_slice(&chunk.expect("chunk"));
        }
        out
    }

    #[tokio::test]
    async fn test_store_and_read_round_trip() {
        let (_dir, storage) = storage().await;

        let path = storage.store("doc.pdf", b"%PDF-1.4 test").await.unwrap();
        assert!(path.ends_with("doc.pdf"));
        assert!(storage.exists("doc.pdf").await.unwrap());

        let stream = storage.read_stream("doc.pdf").await.unwrap();
        assert_eq!(collect(stream).await, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let (_dir, storage) = storage().await;

        match storage.read_stream("absent.pdf").await {
            Err(StorageError::NotFound(name)) => assert_eq!(name, "absent.pdf"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (_dir, storage) = storage().await;

        storage.store("doc.pdf", b"bytes").await.unwrap();
        storage.remove("doc.pdf").await.unwrap();
        assert!(!storage.exists("doc.pdf").await.unwrap());

        // Removing again is fine
        storage.remove("doc.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let (_dir, storage) = storage().await;

        for name in ["../escape.pdf", "a/b.pdf", "a\\b.pdf", "", "..", "a..b/../c"] {
            match storage.store(name, b"x").await {
                Err(StorageError::InvalidFilename(_)) => {}
                other => panic!("expected InvalidFilename for {:?}, got {:?}", name, other),
            }
        }
    }

    #[tokio::test]
    async fn test_new_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("uploads").join("deep");
        let storage = LocalStorage::new(&nested).await.unwrap();
        assert!(nested.is_dir());
        storage.store("doc.pdf", b"x").await.unwrap();
        assert!(nested.join("doc.pdf").is_file());
    }
}
