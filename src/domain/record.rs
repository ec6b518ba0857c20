use super::payment::{Amount, PaymentMethod};
use chrono::{NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the transaction log.
///
/// Records are only ever appended; nothing rewrites or removes an entry once it
/// has been persisted.
///
/// `amount` is the exact decimal that was paid. Positivity is enforced by
/// [`Amount`] when a payment is submitted, not when old entries are read back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TransactionRecord {
    pub method: PaymentMethod,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "iso_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl TransactionRecord {
    /// The timestamp is truncated to the microseconds the log can hold.
    pub fn new(method: PaymentMethod, amount: Amount, timestamp: NaiveDateTime) -> Self {
        Self {
            method,
            amount: amount.value(),
            timestamp: timestamp.trunc_subsecs(6),
        }
    }
}

/// ISO-8601 without offset, microsecond precision: `2024-05-01T12:00:00.123456`.
pub mod iso_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // `%.f` also matches a missing fraction.
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(serde::de::Error::custom)
    }
}
