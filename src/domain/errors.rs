//! Failure contracts for domain guards
//!
//! Architecture: Immutable Failure Values - A violation is a value, not a mutable object
//! - Every failure carries its formatted message from construction onward
//! - The guard dispatcher is generic over which failure type it produces, so
//!   callers can map different violations to different error classes
//! - `domain_error!` declares new failure types the way a domain layer would
//!   otherwise subclass a base exception

use serde::{Deserialize, Serialize};

/// Contract for failure types raised by the guard dispatcher.
///
/// A type satisfying this contract can be selected at any guard call site as
/// the error to produce on violation. The message passed to [`from_message`]
/// is the complete, formatted violation description; implementations must
/// store it verbatim and report it back from [`message`] and `Display`.
///
/// [`from_message`]: DomainFailure::from_message
/// [`message`]: DomainFailure::message
pub trait DomainFailure: std::error::Error + Sized {
    /// Build a failure carrying the given violation message.
    fn from_message(message: impl Into<String>) -> Self;

    /// Human-readable description of the violation.
    fn message(&self) -> &str;
}

/// Result type for guard operations
pub type GuardResult<E> = Result<(), E>;

/// Ready-made failure type for callers without their own error taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl Default for DomainError {
    fn default() -> Self {
        Self {
            message: "A domain rule was violated.".to_string(),
        }
    }
}

impl DomainFailure for DomainError {
    fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Declare a named domain failure type with a base message.
///
/// The base message is what a failure built via `Default` reports; failures
/// built by the guards through [`DomainFailure::from_message`] carry the
/// formatted violation message instead. The message is fixed at construction
/// and never mutated afterwards.
///
/// ```
/// use domain_guard::domain_error;
///
/// domain_error!(pub OrderNotFound, "The requested order does not exist.");
/// ```
#[macro_export]
macro_rules! domain_error {
    ($(#[$meta:meta])* $vis:vis $name:ident, $base:expr) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::thiserror::Error,
        )]
        #[error("{message}")]
        $vis struct $name {
            message: ::std::string::String,
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    message: ::std::string::String::from($base),
                }
            }
        }

        impl $crate::domain::errors::DomainFailure for $name {
            fn from_message(message: impl ::std::convert::Into<::std::string::String>) -> Self {
                Self {
                    message: message.into(),
                }
            }

            fn message(&self) -> &str {
                &self.message
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    domain_error!(OrderNotFound, "The requested order does not exist.");

    #[test]
    fn test_domain_error_carries_message() {
        let error = DomainError::from_message("Quantity must be greater than zero.");

        assert_eq!(error.message(), "Quantity must be greater than zero.");
        assert_eq!(error.to_string(), "Quantity must be greater than zero.");
    }

    #[test]
    fn test_default_reports_base_message() {
        let error = OrderNotFound::default();

        assert_eq!(error.message(), "The requested order does not exist.");
    }

    #[test]
    fn test_declared_failure_overrides_base_message() {
        let error = OrderNotFound::from_message("Order 42 does not exist.");

        assert_eq!(error.message(), "Order 42 does not exist.");
        assert_eq!(error.to_string(), "Order 42 does not exist.");
    }

    #[test]
    fn test_json_round_trip() {
        let error = DomainError::from_message("Value cannot be null.");

        let json = serde_json::to_string(&error).unwrap();
        let parsed: DomainError = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, error);
    }
}
