//! Common API types for the position service

use crate::directory::DirectoryError;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for API operations
pub type ApiResult<T> = Result<T, PositionError>;

/// Failures a position computation can surface to its caller
#[derive(Debug, Clone, PartialEq)]
pub enum PositionError {
    /// The request failed validation before any lookup took place
    InvalidRequest(ValidationError),
    /// None of the requested station identities are known to the directory
    NoStationsMatched,
    /// The directory lookup itself failed; distinct from a lookup that
    /// merely found nothing
    Directory(DirectoryError),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidRequest(error) => write!(f, "invalid request: {}", error),
            PositionError::NoStationsMatched => write!(f, "no stations matched"),
            PositionError::Directory(error) => write!(f, "directory failure: {}", error),
        }
    }
}

impl std::error::Error for PositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionError::InvalidRequest(error) => Some(error),
            PositionError::NoStationsMatched => None,
            PositionError::Directory(error) => Some(error),
        }
    }
}

impl From<ValidationError> for PositionError {
    fn from(error: ValidationError) -> Self {
        PositionError::InvalidRequest(error)
    }
}

impl From<DirectoryError> for PositionError {
    fn from(error: DirectoryError) -> Self {
        PositionError::Directory(error)
    }
}

/// Service configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Capacity of the unknown-signal recorder queue. Batches submitted
    /// while the queue is full are dropped, not waited on.
    pub recorder_queue_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            recorder_queue_size: 64,
        }
    }
}
