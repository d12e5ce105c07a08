//! # Payment Error Types
//!
//! Typed error handling for gateway-select.
//! Registry lookups and sessions return `Result<T, PaymentError>`.
//!
//! A rejected selection is never an error (the session re-prompts), and a
//! strategy that declines a payment reports `PaymentStatus::Failed` instead.

use thiserror::Error;

/// Core error type for registry and session operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// No strategies were registered before the session started
    #[error("No payment strategies registered")]
    EmptyRegistry,

    /// Lookup past the end of the registry
    #[error("Selection {position} is out of range for {len} payment options")]
    SelectionOutOfRange { position: usize, len: usize },

    /// Input stream ended while a selection was still required
    #[error("Input closed before a payment option was selected")]
    InputClosed,

    /// Configuration errors (unknown currency, bad log format)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Console read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaymentError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            PaymentError::Configuration(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(PaymentError::EmptyRegistry.exit_code(), 1);
        assert_eq!(PaymentError::InputClosed.exit_code(), 1);
        assert_eq!(
            PaymentError::Configuration("bad currency".into()).exit_code(),
            2
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: PaymentError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, PaymentError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
