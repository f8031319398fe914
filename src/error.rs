// src/error.rs
use thiserror::Error;

/// Errors raised while configuring, running or reporting an estimation
#[derive(Error, Debug)]
pub enum PiError {
    /// Required positional argument missing
    #[error("usage: {program} <pairs> [<max_number>]")]
    Usage { program: String },

    /// Argument present but not a base-10 integer
    #[error("invalid value '{input}' for <{argument}>: expected a base-10 integer")]
    Parse { argument: String, input: String },

    /// Well-formed integer that does not fit in a signed 64-bit value
    #[error("value '{input}' for <{argument}> is out of range for a 64-bit integer")]
    OutOfRange { argument: String, input: String },

    /// Argument parsed but below the allowed bound
    #[error("{value} must be greater than {bound}.")]
    TooSmall {
        argument: String,
        value: i64,
        bound: i64,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// No coprime pair was observed, so 6 / fraction has no finite value
    #[error("no co-prime pairs observed in {trials} trials; pi estimate is undefined")]
    DegenerateResult { trials: u64 },

    /// Rayon pool construction failed
    #[error("failed to build thread pool: {reason}")]
    ThreadPool { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for pi-coprime operations
pub type PiResult<T> = Result<T, PiError>;

/// Validation utilities
pub mod validation {
    use super::{PiError, PiResult};
    use std::num::IntErrorKind;

    /// Smallest value (exclusive) accepted for both command line numbers
    pub const MIN_EXCLUSIVE: i64 = 10;

    /// Parse a base-10 integer, keeping "parsed as 0" apart from "not a number"
    pub fn parse_integer(argument: &str, input: &str) -> PiResult<i64> {
        input.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PiError::OutOfRange {
                argument: argument.to_string(),
                input: input.to_string(),
            },
            _ => PiError::Parse {
                argument: argument.to_string(),
                input: input.to_string(),
            },
        })
    }

    /// Validate that a value is strictly greater than `bound`
    pub fn validate_greater_than(argument: &str, value: i64, bound: i64) -> PiResult<()> {
        if value <= bound {
            Err(PiError::TooSmall {
                argument: argument.to_string(),
                value,
                bound,
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a trial count is non-zero
    pub fn validate_trials(trials: u64) -> PiResult<()> {
        if trials == 0 {
            Err(PiError::InvalidConfiguration {
                field: "pairs".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an upper bound leaves a non-empty range [1, max]
    pub fn validate_upper_bound(max_number: u64) -> PiResult<()> {
        if max_number == 0 {
            Err(PiError::InvalidConfiguration {
                field: "max_number".to_string(),
                reason: "must be at least 1".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
