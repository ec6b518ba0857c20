//! Adapters implementing the domain ports.

pub mod clock;
pub mod in_memory;
pub mod json_file;
