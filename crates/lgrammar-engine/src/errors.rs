//! Error handling for lgrammar-engine
//!
//! Wraps lgrammar-core ExError with engine-specific helpers

use lgrammar_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a grammar file validation error
pub fn grammar_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("grammar_parse")
        .with_message(reason.to_string())
}

/// Create a validation error that names the offending symbol
pub fn invalid_symbol(symbol: &str, reason: &str) -> ExError {
    grammar_validation(reason).with_symbol(format!("{:?}", symbol))
}

/// Create a command input error (missing or malformed axiom / seed symbol)
pub fn invalid_command_input(op: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(reason.to_string())
}

/// Create a YAML deserialization error
pub fn from_yaml(err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("grammar_parse")
        .with_message(format!("YAML parse error: {}", err))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
