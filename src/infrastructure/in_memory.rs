use crate::domain::ports::LogStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory log document.
///
/// Clones share the same document, so a test can keep a handle for inspection
/// while the logger owns another.
#[derive(Default, Clone)]
pub struct InMemoryLogStore {
    document: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryLogStore {
    /// Creates a store with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `document`, valid or not.
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document.into()))),
        }
    }

    /// The current document as text, if any.
    pub async fn contents(&self) -> Option<String> {
        let document = self.document.read().await;
        document
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        let document = self.document.read().await;
        Ok(document.clone())
    }

    async fn write(&self, document: &[u8]) -> Result<()> {
        let mut current = self.document.write().await;
        *current = Some(document.to_vec());
        Ok(())
    }
}
