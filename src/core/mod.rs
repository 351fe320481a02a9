//! Core types and constants for the positioning system

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
