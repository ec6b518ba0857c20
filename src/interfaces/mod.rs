//! Inbound adapters: the form validation gate and the CSV batch reader.

pub mod csv;
pub mod form;
