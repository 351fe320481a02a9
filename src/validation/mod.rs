//! Input validation for position requests

pub mod data;

pub use data::{validate_signal, validate_signals, ValidationError};
