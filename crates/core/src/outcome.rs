//! The two-variant result container and its combinators.
//!
//! [`Outcome`] holds either a success value (`Ok`) or an error value (`Err`),
//! and is immutable once built: every combinator consumes the container and
//! returns a new one. Railway-Oriented Programming over explicit values,
//! with a panicking extraction family for callers that have already narrowed
//! the variant.
//!
//! # Examples
//!
//! ```
//! use outcome_core::{anyhow, ok, Outcome};
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     if n % 2 == 0 {
//!         ok(n / 2)
//!     } else {
//!         anyhow(format!("{n} is odd"))
//!     }
//! }
//!
//! let quarter = half(12).and_then(half);
//! assert_eq!(quarter, ok(3));
//!
//! let failed = half(7).map(|n| n * 10);
//! assert!(failed.is_err());
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::panic_any;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::panic::Panic;

/// Container holding exactly one of a success value or an error value.
///
/// The error type defaults to the uniform [`Error`] produced at adapter
/// boundaries, but any payload type works for the combinator family.
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T, E = Error> {
    /// Success, holding the produced value.
    Ok(T),
    /// Failure, holding the error value.
    Err(E),
}

/// Wrap a success value.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Wrap an error value.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Success with no meaningful value. Equal to `ok(())`.
pub fn fin<E>() -> Outcome<(), E> {
    Outcome::Ok(())
}

/// Failure carrying a fresh uniform [`Error`] built from `message`.
pub fn anyhow<T>(message: impl Into<String>) -> Outcome<T, Error> {
    Outcome::Err(Error::msg(message))
}

impl<T, E> Outcome<T, E> {
    /// True when holding a success value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// True when holding an error value.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Raises [`Panic`] carrying `msg` when holding an error value.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => Panic::new(msg).raise(),
        }
    }

    /// Return the error value.
    ///
    /// # Panics
    ///
    /// Raises [`Panic`] carrying `msg` when holding a success value.
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(_) => Panic::new(msg).raise(),
            Self::Err(error) => error,
        }
    }

    /// Return the success value, escalating an error through the unwind
    /// mechanism.
    ///
    /// # Panics
    ///
    /// On `Err`, re-raises the contained value *unchanged* when it is a
    /// uniform [`Error`], preserving its identity and message. Any other
    /// error payload raises [`Panic`] instead, because there is nothing
    /// meaningful to escalate.
    pub fn unwrap(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                let payload: Box<dyn Any + Send> = Box::new(error);
                match payload.downcast::<Error>() {
                    Ok(error) => panic_any(*error),
                    Err(_) => Panic::new("called unwrap() on an Err value").raise(),
                }
            }
        }
    }

    /// Return the error value.
    ///
    /// # Panics
    ///
    /// Raises [`Panic`] when holding a success value.
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => Panic::new("called unwrap_err() on an Ok value").raise(),
            Self::Err(error) => error,
        }
    }

    /// Return the success value or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Return the success value or compute one from the error.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Destructure by applying exactly one of the two callbacks.
    ///
    /// This is the universal primitive: every other combinator can be
    /// written in terms of it.
    pub fn fold<U, F: FnOnce(T) -> U, G: FnOnce(E) -> U>(self, on_ok: F, on_err: G) -> U {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Transform the success value; an error passes through unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the error value; a success passes through unchanged.
    pub fn map_err<F, G: FnOnce(E) -> F>(self, f: G) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chain a fallible step, short-circuiting on the first error.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chain a recovery step, short-circuiting on the first success.
    pub fn or_else<F, G: FnOnce(E) -> Outcome<T, F>>(self, f: G) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Convert into the standard library result for `?` interop.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the contained error value when holding one.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Convert to an `Option`, logging the error if present.
    pub fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(error) => {
                tracing::error!("Operation failed: {}", error);
                None
            }
        }
    }

    /// Get the value or a default, logging the error if present.
    #[must_use]
    pub fn or_default_logged(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                tracing::error!("Operation failed, using default: {}", error);
                default
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
