use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of payment methods a customer can pick from.
///
/// Serialized by variant name. The labels shown by the old desktop form
/// ("Credit Card", "Cryptocurrency", ...) are accepted when decoding so that
/// existing log files keep loading.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PaymentMethod {
    #[serde(alias = "Credit Card")]
    CreditCard,
    PayPal,
    #[serde(alias = "Cryptocurrency")]
    Crypto,
    #[serde(alias = "Apple Pay")]
    ApplePay,
    #[serde(alias = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Crypto,
        PaymentMethod::ApplePay,
        PaymentMethod::BankTransfer,
    ];

    /// Human-readable name used in confirmations.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Crypto => "Cryptocurrency",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    /// What the customer must enter to confirm a payment with this method.
    ///
    /// The value only gates the payment; it is never stored.
    pub fn reference_label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "card number",
            PaymentMethod::PayPal => "PayPal email",
            PaymentMethod::Crypto => "wallet address",
            PaymentMethod::ApplePay => "Apple Device ID",
            PaymentMethod::BankTransfer => "IBAN",
        }
    }

    pub fn prompt(&self) -> String {
        format!("Enter {}:", self.reference_label())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "creditcard" | "card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::PayPal),
            "crypto" | "cryptocurrency" => Ok(PaymentMethod::Crypto),
            "applepay" => Ok(PaymentMethod::ApplePay),
            "banktransfer" | "bank" => Ok(PaymentMethod::BankTransfer),
            _ => Err(PaymentError::UnknownMethod(s.trim().to_string())),
        }
    }
}

/// Represents a positive monetary amount for a payment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidInput(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| PaymentError::InvalidInput("Please enter a valid amount.".to_string()))?;
        Self::new(value)
    }
}

/// Always two fraction digits, e.g. `5.00`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}
