//! Explicit, typed, recoverable error handling over a two-variant container.
//!
//! This crate replaces unwinding-based error propagation at call sites with
//! an [`Outcome`] value: `Ok` holding a success value or `Err` holding an
//! error value, plus a fixed combinator set for inspecting, transforming,
//! and extracting it. Boundary adapters ([`safely`], [`wrap_fn`] and their
//! async counterparts) call into code that may still unwind and capture
//! whatever it raises into a uniform [`Error`], so consumers only ever see
//! values.
//!
//! Contract violations (extracting the wrong variant without narrowing) are
//! a separate taxonomy: they raise the [`Panic`] signal through the unwind
//! mechanism and are not meant to be recovered as data.
//!
//! # Usage
//!
//! ```
//! use outcome_core::{ok, safely, Outcome};
//!
//! let parsed: Outcome<i32> = safely(|| "42".parse::<i32>().unwrap());
//! assert_eq!(parsed, ok(42));
//!
//! let failed: Outcome<i32> = safely(|| "forty-two".parse::<i32>().unwrap());
//! assert!(failed.is_err());
//!
//! let described = failed.fold(
//!     |n| format!("parsed {n}"),
//!     |e| format!("rejected: {e}"),
//! );
//! assert!(described.starts_with("rejected"));
//! ```

pub mod error;
pub mod outcome;
pub mod panic;
pub mod safely;

pub use error::Error;
pub use outcome::{Outcome, anyhow, err, fin, ok};
pub use panic::Panic;
pub use safely::{safely, safely_async, safely_async_with, safely_with, wrap_async_fn, wrap_fn};

// Historical names for the capture adapters, kept for callers that prefer
// the exec-style vocabulary. Identical behavior.
pub use safely::{safely as exec_fn, safely_async as exec_async_fn};
