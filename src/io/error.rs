//! Error types for pattern expansion, swapping and stimulus persistence

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Seed cannot be expanded or truncated validly for the requested operation
    SeedTooShort {
        /// Operation that rejected the seed
        operation: &'static str,
        /// Minimum number of seed values required
        required: usize,
        /// Number of seed values supplied
        actual: usize,
    },

    /// Grid dimensions violate a strategy precondition
    ///
    /// Raised for zero-sized grids, block sizes that do not divide the
    /// target grid, odd checkerboard dimensions and similar cases.
    IncompatibleDimensions {
        /// Operation that rejected the dimensions
        operation: &'static str,
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Explanation of the violated precondition
        reason: String,
    },

    /// Candidate pairs or value groups ran out before the requested swap count
    SwapExhausted {
        /// Number of swaps requested
        requested: usize,
        /// Number of swaps completed before exhaustion
        completed: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Stimulus configuration or document could not be (de)serialized
    Serialization {
        /// Path of the JSON document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeedTooShort {
                operation,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Seed too short for {operation}: need at least {required} values, got {actual}"
                )
            }
            Self::IncompatibleDimensions {
                operation,
                rows,
                cols,
                reason,
            } => {
                write!(
                    f,
                    "Incompatible dimensions {rows}x{cols} for {operation}: {reason}"
                )
            }
            Self::SwapExhausted {
                requested,
                completed,
            } => {
                write!(
                    f,
                    "Swap candidates exhausted after {completed} of {requested} swaps"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PatternError {
    PatternError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an incompatible dimensions error
pub fn incompatible_dimensions(
    operation: &'static str,
    rows: usize,
    cols: usize,
    reason: &impl ToString,
) -> PatternError {
    PatternError::IncompatibleDimensions {
        operation,
        rows,
        cols,
        reason: reason.to_string(),
    }
}
