//! Boundary adapters.
//!
//! These functions call into host code that may unwind (and may be
//! asynchronous), and capture the outcome as an [`Outcome`] value. Whatever
//! payload the callee raises is normalized to the uniform [`Error`] shape;
//! nothing escapes the adapter uncaptured. Each adapter invokes the supplied
//! function exactly once and never retries.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use futures::FutureExt;

use crate::error::Error;
use crate::outcome::Outcome;

fn captured<T, C>(to_err: C, payload: Box<dyn Any + Send>) -> Outcome<T, Error>
where
    C: FnOnce(Box<dyn Any + Send>) -> Error,
{
    let error = to_err(payload);
    tracing::debug!("captured unwind at adapter boundary: {}", error);
    Outcome::Err(error)
}

/// Invoke `f`, capturing any unwind into an `Err` with the default
/// normalization. A normal return becomes `Ok`.
pub fn safely<T, F>(f: F) -> Outcome<T, Error>
where
    F: FnOnce() -> T + UnwindSafe,
{
    safely_with(Error::from_caught, f)
}

/// Like [`safely`], but normalizes the raised payload with `to_err` instead
/// of [`Error::from_caught`].
pub fn safely_with<T, F, C>(to_err: C, f: F) -> Outcome<T, Error>
where
    F: FnOnce() -> T + UnwindSafe,
    C: FnOnce(Box<dyn Any + Send>) -> Error,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => captured(to_err, payload),
    }
}

/// Adapt a function that may unwind into one returning an [`Outcome`].
///
/// Rust has no variadic functions; multi-argument callees are wrapped
/// through a tuple argument or an enclosing closure.
pub fn wrap_fn<A, T, F>(f: F) -> impl Fn(A) -> Outcome<T, Error>
where
    F: Fn(A) -> T,
{
    // The wrapper owns the only call site, so asserting unwind safety for
    // the bound argument is sound.
    move |arg| safely_with(Error::from_caught, AssertUnwindSafe(|| f(arg)))
}

/// Asynchronous [`safely`]: `f` produces a future, and unwinds raised while
/// constructing or awaiting it are both captured. The returned future
/// settles exactly once.
pub async fn safely_async<T, Fut, F>(f: F) -> Outcome<T, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    safely_async_with(Error::from_caught, f).await
}

/// Asynchronous [`safely_with`].
pub async fn safely_async_with<T, Fut, F, C>(to_err: C, f: F) -> Outcome<T, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    C: FnOnce(Box<dyn Any + Send>) -> Error,
{
    let pending = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(pending) => pending,
        Err(payload) => return captured(to_err, payload),
    };
    match AssertUnwindSafe(pending).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => captured(to_err, payload),
    }
}

/// Adapt an async function into one whose future resolves to an
/// [`Outcome`] instead of unwinding.
pub fn wrap_async_fn<A, T, Fut, F>(f: F) -> impl AsyncFn(A) -> Outcome<T, Error>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T>,
{
    async move |arg| {
        let pending = match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
            Ok(pending) => pending,
            Err(payload) => return captured(Error::from_caught, payload),
        };
        match AssertUnwindSafe(pending).catch_unwind().await {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => captured(Error::from_caught, payload),
        }
    }
}
