//! Request validation for incoming signal batches

use crate::core::constants::{MAX_SIGNAL_STRENGTH_DBM, MIN_SIGNAL_STRENGTH_DBM};
use crate::core::types::Signal;
use std::fmt;

/// Validation errors for a position request
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The request contained no signals at all
    EmptyRequest,
    /// A required identifier field was empty
    MissingField { index: usize, field: &'static str },
    /// Signal strength outside the accepted dBm range
    StrengthOutOfRange { index: usize, strength: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyRequest => {
                write!(f, "request contains no signals")
            }
            ValidationError::MissingField { index, field } => {
                write!(f, "signal {}: required field '{}' is empty", index, field)
            }
            ValidationError::StrengthOutOfRange { index, strength } => {
                write!(
                    f,
                    "signal {}: strength {} dBm outside [{}, {}]",
                    index, strength, MIN_SIGNAL_STRENGTH_DBM, MAX_SIGNAL_STRENGTH_DBM
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a whole request: it must be non-empty and every signal in it
/// must pass [`validate_signal`].
pub fn validate_signals(signals: &[Signal]) -> Result<(), ValidationError> {
    if signals.is_empty() {
        return Err(ValidationError::EmptyRequest);
    }

    for (index, signal) in signals.iter().enumerate() {
        validate_signal(index, signal)?;
    }

    Ok(())
}

/// Validate a single signal's identifier fields and strength range.
pub fn validate_signal(index: usize, signal: &Signal) -> Result<(), ValidationError> {
    if signal.mnc.is_empty() {
        return Err(ValidationError::MissingField { index, field: "mnc" });
    }
    if signal.lac.is_empty() {
        return Err(ValidationError::MissingField { index, field: "lac" });
    }
    if signal.cid.is_empty() {
        return Err(ValidationError::MissingField { index, field: "cid" });
    }

    if signal.strength < MIN_SIGNAL_STRENGTH_DBM || signal.strength > MAX_SIGNAL_STRENGTH_DBM {
        return Err(ValidationError::StrengthOutOfRange {
            index,
            strength: signal.strength,
        });
    }

    Ok(())
}
