use crate::domain::payment::PaymentMethod;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("{0}")]
    #[diagnostic(code(paylog::invalid_input))]
    InvalidInput(String),

    #[error("Unknown payment method: {0}")]
    #[diagnostic(
        code(paylog::unknown_method),
        help("run `paylog methods` to list the supported methods")
    )]
    UnknownMethod(String),

    #[error("No payment strategy set.")]
    #[diagnostic(code(paylog::no_strategy_set))]
    NoStrategySet,

    #[error("Failed to persist transaction log: {0}")]
    #[diagnostic(code(paylog::persistence))]
    Persistence(#[from] std::io::Error),

    #[error("Failed to encode transaction log: {0}")]
    #[diagnostic(code(paylog::encoding))]
    Encoding(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    #[diagnostic(code(paylog::csv))]
    Csv(#[from] csv::Error),
}

impl PaymentError {
    pub fn unregistered(method: PaymentMethod) -> Self {
        Self::UnknownMethod(method.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
