//! Uniform error representation for recoverable failures.
//!
//! Every failure captured at an adapter boundary is normalized to [`Error`],
//! which carries a human-readable message. Normalization is pluggable per
//! adapter call; [`Error::from_caught`] is the default rule.

use std::any::Any;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::panic::Panic;

/// Uniform error type carried by the `Err` variant at adapter boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    /// Create an error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Default normalization for a caught unwind payload.
    ///
    /// An `Error` payload is returned unchanged, preserving its identity.
    /// Anything else is reduced to its message text: a [`Panic`] contributes
    /// its message, and the `String` / `&str` payloads produced by ordinary
    /// `panic!` calls are taken verbatim. Payloads with no renderable text
    /// fall back to a fixed message.
    #[must_use]
    pub fn from_caught(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(error) => return *error,
            Err(other) => other,
        };
        let payload = match payload.downcast::<Panic>() {
            Ok(panic) => return Self::msg(panic.message()),
            Err(other) => other,
        };
        let payload = match payload.downcast::<String>() {
            Ok(text) => return Self::msg(*text),
            Err(other) => other,
        };
        match payload.downcast::<&'static str>() {
            Ok(text) => Self::msg(*text),
            Err(_) => Self::msg("unhandled panic of unknown type"),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_message_accessor_and_display_agree() {
        let error = Error::msg("disk full");
        assert_eq!(error.message(), "disk full");
        assert_eq!(error.to_string(), "disk full");
    }

    #[test]
    fn test_from_caught_keeps_error_unchanged() {
        let original = Error::msg("already shaped");
        let payload: Box<dyn Any + Send> = Box::new(original.clone());
        assert_eq!(Error::from_caught(payload), original);
    }

    #[test]
    fn test_from_caught_takes_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new(Panic::new("broken contract"));
        assert_eq!(Error::from_caught(payload), Error::msg("broken contract"));
    }

    #[test]
    fn test_from_caught_takes_string_payloads() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(Error::from_caught(owned), Error::msg("owned text"));

        let borrowed: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(Error::from_caught(borrowed), Error::msg("static text"));
    }

    #[test]
    fn test_from_caught_falls_back_for_opaque_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(
            Error::from_caught(payload),
            Error::msg("unhandled panic of unknown type")
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let error = Error::msg("serialize me");
        let json = serde_json::to_string(&error).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
