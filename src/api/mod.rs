//! Position computation API
//!
//! The service entry point plus the background plumbing for recording
//! signals that matched no known station.

pub mod service;
pub mod types;
pub mod worker;

pub use service::PositionService;
pub use types::{ApiConfig, ApiResult, PositionError};
pub use worker::UnknownSignalWorker;
