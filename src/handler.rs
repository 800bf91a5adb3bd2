//! Pluggable handling for errors raised by fallible closures.
//!
//! An [`ErrorHandler`] decides what happens to an error: hand it back to the
//! caller ([`Propagate`]), abort ([`Panic`]), report it ([`Log`]) or drop it
//! ([`Silent`]). `try_call`/`try_run` run a closure and route any error
//! through the handler.
//!
//! ```rust
//! use sugars_util::handler::{ErrorHandler, Propagate, Silent};
//! use sugars_util::BoxError;
//!
//! let parsed = Silent.try_call(|| Ok::<_, BoxError>("12".parse::<i32>()?));
//! assert_eq!(parsed, Ok(Some(12)));
//!
//! let failed = Silent.try_call(|| Ok::<_, BoxError>("x".parse::<i32>()?));
//! assert_eq!(failed, Ok(None));
//!
//! assert!(Propagate.try_run(|| Err("boom".into())).is_err());
//! ```

use crate::error::BoxError;
use std::convert::Infallible;
use std::error::Error;

/// Decides the fate of an error produced inside `try_call`/`try_run`.
pub trait ErrorHandler {
    /// What the handler escalates to the caller, if anything.
    type Error;

    /// Handles `error`. `Ok(())` means the error was absorbed.
    fn handle(&self, error: BoxError) -> Result<(), Self::Error>;

    /// Calls `f`. On failure the error goes to [`handle`](ErrorHandler::handle)
    /// and, if absorbed, the result is `Ok(None)`.
    fn try_call<V, F>(&self, f: F) -> Result<Option<V>, Self::Error>
    where
        F: FnOnce() -> Result<V, BoxError>,
    {
        match f() {
            Ok(value) => Ok(Some(value)),
            Err(error) => self.handle(error).map(|()| None),
        }
    }

    /// Runs `f`. Returns `Ok(true)` on success and `Ok(false)` when the
    /// error was absorbed.
    fn try_run<F>(&self, f: F) -> Result<bool, Self::Error>
    where
        F: FnOnce() -> Result<(), BoxError>,
    {
        self.try_call(f).map(|done| done.is_some())
    }
}

/// Hands every error back to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Propagate;

impl ErrorHandler for Propagate {
    type Error = BoxError;

    fn handle(&self, error: BoxError) -> Result<(), BoxError> {
        Err(error)
    }
}

/// Panics with the error's message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panic;

impl ErrorHandler for Panic {
    type Error = Infallible;

    fn handle(&self, error: BoxError) -> Result<(), Infallible> {
        panic!("unhandled error: {error}")
    }
}

/// Reports the error through `log::error!` and absorbs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl ErrorHandler for Log {
    type Error = Infallible;

    fn handle(&self, error: BoxError) -> Result<(), Infallible> {
        log::error!("{error}");
        let mut source = error.source();
        while let Some(cause) = source {
            log::error!("  caused by: {cause}");
            source = cause.source();
        }
        Ok(())
    }
}

/// Absorbs every error without a trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ErrorHandler for Silent {
    type Error = Infallible;

    fn handle(&self, _error: BoxError) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<H: ErrorHandler + ?Sized> ErrorHandler for &H {
    type Error = H::Error;

    fn handle(&self, error: BoxError) -> Result<(), Self::Error> {
        (**self).handle(error)
    }
}

/// Composition for fallible runnables.
pub trait RunnableExt: FnOnce() -> Result<(), BoxError> + Sized {
    /// Runs `self`, then `after` if `self` succeeded.
    fn and_then<G>(self, after: G) -> impl FnOnce() -> Result<(), BoxError>
    where
        G: FnOnce() -> Result<(), BoxError>,
    {
        move || {
            self()?;
            after()
        }
    }

    /// Runs `before`, then `self` if `before` succeeded.
    fn compose<G>(self, before: G) -> impl FnOnce() -> Result<(), BoxError>
    where
        G: FnOnce() -> Result<(), BoxError>,
    {
        move || {
            before()?;
            self()
        }
    }

    /// Runs `self`, panicking on error.
    fn run_or_panic(self) {
        let _ = Panic.try_run(self);
    }
}

impl<F> RunnableExt for F where F: FnOnce() -> Result<(), BoxError> {}
