//! Contract-violation signal.
//!
//! A [`Panic`] is raised when a caller breaks the API contract, such as
//! calling `unwrap_err()` on an `Ok` value. It is not a domain error: it is
//! never stored inside an [`Outcome`](crate::Outcome), it does not implement
//! `std::error::Error`, and there is no conversion into
//! [`Error`](crate::Error), so it cannot be silently recovered as data.

use std::fmt;
use std::panic::panic_any;

/// Signal raised through the unwind mechanism on a broken caller contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Create a panic signal carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raise this signal to the nearest unwind boundary. Never returns.
    pub fn raise(self) -> ! {
        panic_any(self)
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_raise_unwinds_with_the_signal_as_payload() {
        let caught = std::panic::catch_unwind(|| Panic::new("contract broken").raise());
        let payload = caught.unwrap_err();
        let panic = payload.downcast::<Panic>().unwrap();
        assert_eq!(panic.message(), "contract broken");
    }

    #[test]
    fn test_display_is_the_message() {
        assert_eq!(Panic::new("oops").to_string(), "oops");
    }
}
