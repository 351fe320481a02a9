//! Station directory abstraction
//!
//! The directory holding known station coordinates and the recorder for
//! unknown signals are external collaborators (typically a database). This
//! module defines their boundary; the crate only ships the in-memory
//! implementations used by tests and the demo binary.

pub mod memory;

pub use memory::{MemorySignalRecorder, MemoryStationDirectory};

use crate::core::types::{Signal, Station};
use std::fmt;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors raised by a directory backend
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// The backend could not be reached
    Unavailable { reason: String },
    /// The lookup or write itself failed
    Query { message: String },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Unavailable { reason } => {
                write!(f, "station directory unavailable: {}", reason)
            }
            DirectoryError::Query { message } => {
                write!(f, "station directory query failed: {}", message)
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Read-only lookup of known stations.
pub trait StationDirectory: Send + Sync {
    /// Return the stations whose identity appears in `ids`. The result may
    /// contain fewer records than requested; absence is not an error at
    /// this boundary.
    fn find_stations(&self, ids: &[String]) -> DirectoryResult<Vec<Station>>;
}

/// Sink for signals whose station is not in the directory. Invoked off the
/// request path; callers never observe the outcome.
pub trait UnknownSignalRecorder: Send + Sync {
    fn record_unknown(&self, signals: &[Signal]) -> DirectoryResult<()>;
}
