//! Domain model: payment methods, amounts, log records and the ports the
//! application layer depends on.

pub mod payment;
pub mod ports;
pub mod record;
pub mod strategy;
