//! Error types for outbox.

use thiserror::Error;

use crate::mail::AddressError;

/// Common error type for outbox.
#[derive(Error, Debug)]
pub enum OutboxError {
    /// Address validation error.
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for outbox operations.
pub type Result<T> = std::result::Result<T, OutboxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Address;

    #[test]
    fn test_address_error_conversion() {
        let err: OutboxError = Address::parse("not-an-email").unwrap_err().into();
        assert!(matches!(err, OutboxError::Address(_)));
        assert!(err.to_string().starts_with("invalid address:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OutboxError = io_err.into();
        assert!(matches!(err, OutboxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_config_error_display() {
        let err = OutboxError::Config("missing section".to_string());
        assert_eq!(err.to_string(), "configuration error: missing section");
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(OutboxError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
