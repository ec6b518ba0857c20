use crate::interfaces::form::PaymentForm;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PaymentRow {
    amount: String,
    method: Option<String>,
    reference: Option<String>,
}

impl From<PaymentRow> for PaymentForm {
    fn from(row: PaymentRow) -> Self {
        PaymentForm {
            amount: row.amount,
            method: row.method,
            reference: row.reference,
        }
    }
}

/// Reads payment submissions from a CSV source with the header
/// `amount,method,reference`.
///
/// Rows come out as unvalidated [`PaymentForm`]s so each one goes through the
/// same checks as a single payment.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads payment rows.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentForm>> {
        self.reader
            .into_deserialize::<PaymentRow>()
            .map(|result| result.map(PaymentForm::from).map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentMethod;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "amount, method, reference\n19.99, PayPal, me@example.com\n5, Credit Card, 4111111111111111";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentForm>> = reader.payments().collect();

        assert_eq!(results.len(), 2);
        let request = results[1].as_ref().unwrap().validate().unwrap();
        assert_eq!(request.method, PaymentMethod::CreditCard);
        assert_eq!(request.amount.value(), dec!(5));
    }

    #[test]
    fn test_reader_missing_columns() {
        let data = "amount, method, reference\n10, Crypto";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentForm>> = reader.payments().collect();

        let form = results[0].as_ref().unwrap();
        assert_eq!(form.reference, None);
        assert!(form.validate().is_err());
    }
}
