use super::logger::TransactionLogger;
use crate::domain::payment::{Amount, PaymentMethod};
use crate::domain::record::TransactionRecord;
use crate::domain::strategy::{Confirmation, PaymentContext, StrategyRegistry};
use crate::error::Result;
use std::fmt;

/// A validated payment submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub amount: Amount,
}

impl PaymentRequest {
    pub fn new(method: PaymentMethod, amount: Amount) -> Self {
        Self { method, amount }
    }
}

/// What the customer is told once a payment has been executed and logged.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub confirmation: Confirmation,
    pub record: TransactionRecord,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment of ${} via {} completed and logged.",
            self.confirmation.amount, self.confirmation.method
        )
    }
}

/// The main entry point for processing payments.
///
/// `PaymentEngine` owns the strategy registry and the transaction logger. A
/// payment is dispatched first and logged second; a receipt is only handed
/// out when both succeed.
pub struct PaymentEngine {
    registry: StrategyRegistry,
    logger: TransactionLogger,
}

impl PaymentEngine {
    /// Creates a new `PaymentEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `registry` - Handlers for the supported payment methods.
    /// * `logger` - The transaction log every successful payment is appended to.
    pub fn new(registry: StrategyRegistry, logger: TransactionLogger) -> Self {
        Self { registry, logger }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Executes and logs a payment.
    ///
    /// Nothing is logged if dispatch fails, and no receipt is returned if the
    /// log cannot be written.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<Receipt> {
        let mut context = PaymentContext::new(&self.registry);
        context.set_strategy(request.method);
        let confirmation = context.pay(request.amount)?;

        let record = self.logger.append(request.method, request.amount).await?;

        Ok(Receipt {
            confirmation,
            record,
        })
    }

    /// All logged transactions, oldest first.
    pub async fn history(&self) -> Result<Vec<TransactionRecord>> {
        self.logger.load().await
    }
}
