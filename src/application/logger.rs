use crate::domain::payment::{Amount, PaymentMethod};
use crate::domain::ports::{ClockBox, LogStoreBox};
use crate::domain::record::TransactionRecord;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Appends transaction records to the log document held by a [`LogStore`].
///
/// Every append reads the whole document, adds one record in memory and writes
/// the whole document back. A missing or undecodable document counts as an
/// empty log, so a damaged file never blocks new payments.
///
/// [`LogStore`]: crate::domain::ports::LogStore
pub struct TransactionLogger {
    store: LogStoreBox,
    clock: ClockBox,
    // Serializes read-modify-write cycles issued through this logger.
    write_lock: Mutex<()>,
}

impl TransactionLogger {
    /// Creates a new `TransactionLogger`.
    ///
    /// # Arguments
    ///
    /// * `store` - Where the log document is kept.
    /// * `clock` - Source of record timestamps.
    pub fn new(store: LogStoreBox, clock: ClockBox) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns every record in the log, oldest first.
    pub async fn load(&self) -> Result<Vec<TransactionRecord>> {
        let Some(bytes) = self.store.read().await? else {
            return Ok(Vec::new());
        };
        Ok(decode(&bytes))
    }

    /// Appends a record for `method` and `amount`, stamped with the clock's
    /// current time, and persists the updated log.
    pub async fn append(&self, method: PaymentMethod, amount: Amount) -> Result<TransactionRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let record = TransactionRecord::new(method, amount, self.clock.now());
        records.push(record.clone());

        self.store.write(&encode(&records)?).await?;
        info!(
            method = ?record.method,
            amount = %record.amount,
            entries = records.len(),
            "transaction logged"
        );
        Ok(record)
    }
}

fn decode(bytes: &[u8]) -> Vec<TransactionRecord> {
    match serde_json::from_slice(bytes) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "transaction log is unreadable, starting a new one");
            Vec::new()
        }
    }
}

/// Serializes `records` as a JSON array indented with four spaces.
pub fn encode(records: &[TransactionRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    Ok(buf)
}
