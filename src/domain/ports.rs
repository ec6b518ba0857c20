use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Storage for the serialized transaction log document.
///
/// Stores deal in whole documents: the logger reads everything, appends in
/// memory and hands the complete document back to `write`.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Returns the raw document, or `None` if nothing has been written yet.
    async fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the stored document. Readers must observe either the previous
    /// document or the new one, never a partial write.
    async fn write(&self, document: &[u8]) -> Result<()>;
}

pub type LogStoreBox = Box<dyn LogStore>;

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime + Send + Sync,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

pub type ClockBox = Box<dyn Clock>;
