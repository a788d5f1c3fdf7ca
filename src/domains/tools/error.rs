//! Calculator error type.

use thiserror::Error;

/// Errors raised by the calculator for invalid operations or inputs.
///
/// These are reported back to the caller as an error tool result; they are
/// never transport or protocol failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// The divisor of a division was zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The operation name is not one of add, subtract, multiply, divide.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalculationError {
    /// Create a new "unknown operation" error.
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation(operation.into())
    }
}
