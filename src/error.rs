//! Error types for arithmetic operations.

use thiserror::Error;

/// Errors from calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown operation '{0}' (expected add, subtract, multiply or divide)")]
    UnknownOperation(String),
}

impl CalcError {
    pub fn division_by_zero() -> Self {
        CalcError::InvalidArgument("Cannot divide by zero".to_string())
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
