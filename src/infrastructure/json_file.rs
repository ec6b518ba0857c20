use crate::domain::ports::LogStore;
use crate::error::Result;
use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Where the log lives unless told otherwise.
pub const DEFAULT_LOG_PATH: &str = "payment_logs.json";

/// Keeps the log document in a single file.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so the file on disk is always a complete document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[async_trait]
impl LogStore for JsonFileStore {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                debug!(path = %self.path.display(), bytes = bytes.len(), "read log");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "log does not exist yet");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, document: &[u8]) -> Result<()> {
        let path = self.path.clone();
        let len = document.len();
        let document = document.to_vec();

        tokio::task::spawn_blocking(move || replace_file(&path, &document))
            .await
            .map_err(io::Error::other)??;

        debug!(path = %self.path.display(), bytes = len, "wrote log");
        Ok(())
    }
}

fn replace_file(path: &Path, document: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(document)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("payment_logs.json"));

        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("payment_logs.json"));

        store.write(b"[]").await.unwrap();
        store.write(b"[1, 2]").await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(b"[1, 2]".to_vec()));
        // Only the log itself is left behind, no temporary files.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("payments.json");
        let store = JsonFileStore::new(&path);

        store.write(b"[]").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_unreadable_path_is_an_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be read as a document.
        let store = JsonFileStore::new(dir.path());

        assert!(store.read().await.is_err());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(JsonFileStore::default().path(), Path::new(DEFAULT_LOG_PATH));
    }
}
