//! Blob store on the local filesystem
//!
//! Files are written to the uploads directory as `{unix-millis}{.ext}` and
//! referenced by their public path under the configured prefix.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use lf_core::errors::DomainError;
use lf_core::services::blob::{BlobStoreTrait, StoredBlob, Upload};
use lf_shared::UploadConfig;

use crate::InfrastructureError;

/// Stores uploads under a directory on disk
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    config: UploadConfig,
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(config: UploadConfig) -> Self {
        let root = PathBuf::from(&config.dir);
        Self { config, root }
    }

    /// Create the uploads directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), InfrastructureError> {
        if fs::metadata(&self.root).await.is_err() {
            fs::create_dir_all(&self.root).await?;
            tracing::info!(dir = %self.root.display(), "Created uploads directory");
        }
        Ok(())
    }

    fn reference_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.config.public_prefix.trim_end_matches('/'), file_name)
    }

    /// Map a public reference back to a file name in the root directory
    fn file_name_of<'a>(&self, reference: &'a str) -> Option<&'a str> {
        let prefix = self.config.public_prefix.trim_end_matches('/');
        let name = reference.strip_prefix(prefix)?.strip_prefix('/')?;
        let is_plain = !name.is_empty()
            && !name.contains('/')
            && !name.contains('\\')
            && name != "."
            && name != "..";
        is_plain.then_some(name)
    }

    /// Write the bytes to a fresh `{millis}{ext}` file, skipping names in use
    async fn write_new(&self, upload: &Upload) -> Result<String, InfrastructureError> {
        let ext = upload.extension();
        let mut stamp = Utc::now().timestamp_millis();

        loop {
            let file_name = format!("{}{}", stamp, ext);
            let path = self.root.join(&file_name);
            let opened = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match opened {
                Ok(file) => {
                    fill_or_remove(&path, file, &upload.bytes).await?;
                    return Ok(file_name);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => stamp += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Write all bytes to a freshly created file, removing it if the write fails
async fn fill_or_remove<W>(
    path: &Path,
    mut file: W,
    bytes: &[u8],
) -> Result<(), InfrastructureError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        file.write_all(bytes).await?;
        file.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "Failed to remove partial upload"
            );
        }
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl BlobStoreTrait for LocalBlobStore {
    async fn store(&self, upload: Upload) -> Result<StoredBlob, DomainError> {
        upload.check(&self.config)?;

        let file_name = self.write_new(&upload).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to write upload");
            DomainError::from(e)
        })?;

        tracing::debug!(file = %file_name, bytes = upload.bytes.len(), "Stored upload");
        Ok(StoredBlob {
            reference: self.reference_for(&file_name),
            size: upload.bytes.len() as u64,
        })
    }

    async fn delete(&self, reference: &str) -> Result<(), DomainError> {
        let file_name = self.file_name_of(reference).ok_or_else(|| DomainError::NotFound {
            resource: format!("Upload {}", reference),
        })?;

        match fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DomainError::NotFound {
                resource: format!("Upload {}", reference),
            }),
            Err(e) => Err(InfrastructureError::from(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::errors::ValidationError;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tempfile::TempDir;

    /// Writer whose every write fails, as on a full disk
    struct FullDisk;

    impl AsyncWrite for FullDisk {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(std::io::Error::new(ErrorKind::Other, "no space left")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn store_in(dir: &TempDir) -> LocalBlobStore {
        let config = UploadConfig::default().with_dir(dir.path().to_string_lossy().to_string());
        LocalBlobStore::new(config)
    }

    fn png(bytes: &[u8]) -> Upload {
        Upload {
            file_name: "holiday.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_store_writes_millis_named_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let blob = store.store(png(b"abc")).await.unwrap();
        assert!(blob.reference.starts_with("/uploads/"));
        assert!(blob.reference.ends_with(".png"));
        assert_eq!(blob.size, 3);

        let name = blob.reference.trim_start_matches("/uploads/");
        let stem = name.trim_end_matches(".png");
        assert!(stem.parse::<i64>().is_ok());
        assert_eq!(std::fs::read(dir.path().join(name)).unwrap(), b"abc");
    }

    #[tokio::test]
    async fn test_same_millisecond_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let a = store.store(png(b"first")).await.unwrap();
        let b = store.store(png(b"second")).await.unwrap();
        assert_ne!(a.reference, b.reference);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_rejects_other_media_types() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let upload = Upload {
            file_name: "run.sh".to_string(),
            content_type: "text/x-shellscript".to_string(),
            bytes: b"#!/bin/sh".to_vec(),
        };

        let result = store.store(upload).await;
        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::UnsupportedMediaType { .. }))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let blob = store.store(png(b"abc")).await.unwrap();

        store.delete(&blob.reference).await.unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        assert!(matches!(
            store.delete(&blob.reference).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_refuses_paths_outside_root() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for reference in ["/uploads/../secret", "/etc/passwd", "/uploads/", "/uploads/a/b"] {
            assert!(matches!(
                store.delete(reference).await,
                Err(DomainError::NotFound { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("media").join("uploads");
        let store = LocalBlobStore::new(
            UploadConfig::default().with_dir(nested.to_string_lossy().to_string()),
        );

        store.ensure_dir().await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1700000000000.png");
        std::fs::write(&path, b"").unwrap();

        let result = fill_or_remove(&path, FullDisk, b"abc").await;
        assert!(matches!(result, Err(InfrastructureError::Storage(_))));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_successful_write_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1700000000000.jpg");
        let file = fs::File::create(&path).await.unwrap();

        fill_or_remove(&path, file, b"jpeg").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"jpeg");
    }
}
