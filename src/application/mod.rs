//! Application layer: the transaction logger and the `PaymentEngine` that runs
//! a payment through dispatch, logging and confirmation in that order.

pub mod engine;
pub mod logger;
