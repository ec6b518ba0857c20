use crate::application::engine::PaymentRequest;
use crate::domain::payment::{Amount, PaymentMethod};
use crate::error::{PaymentError, Result};

/// Raw input collected from the customer.
///
/// `reference` is the method-specific identifying string (card number, email,
/// wallet address, ...). It must be present for the payment to proceed but is
/// never passed on to the engine.
#[derive(Debug, Default, Clone)]
pub struct PaymentForm {
    pub amount: String,
    pub method: Option<String>,
    pub reference: Option<String>,
}

impl PaymentForm {
    /// Checks the form and turns it into a request for the engine.
    pub fn validate(&self) -> Result<PaymentRequest> {
        let amount: Amount = self.amount.parse()?;

        let method: PaymentMethod = match self.method.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(PaymentError::InvalidInput(
                    "Please select a payment method.".to_string(),
                ));
            }
            Some(name) => name.parse()?,
        };

        if self.reference.as_deref().map(str::trim).unwrap_or_default().is_empty() {
            return Err(PaymentError::InvalidInput(format!(
                "Payment cancelled: no {} provided.",
                method.reference_label()
            )));
        }

        Ok(PaymentRequest::new(method, amount))
    }
}
