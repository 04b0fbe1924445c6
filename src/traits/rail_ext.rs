//! Extension trait putting the convenience combinators on `Result`.
//!
//! # Examples
//!
//! ```
//! use cause_rail::traits::RailExt;
//! use cause_rail::{Boundary, Flow};
//!
//! fn parse(raw: &str) -> Flow<i64> {
//!     raw.parse::<i64>()
//!         .map_err(|e| e.to_string())
//!         .ensure_with("parsing input")
//!         .map(|n| n * 10)
//! }
//!
//! let mut error = None;
//! let exit = Boundary::errors_only(&mut error).run(|| parse("x1"));
//!
//! assert!(exit.is_tripped());
//! assert_eq!(error.unwrap().message(), "parsing input");
//! ```

use crate::combinators::terminate;
use crate::decorate::decorate_cause;
use crate::propagation::{Flow, Signal};
use crate::traits::IntoCause;
use crate::types::alloc_type::String;

/// Combinators over `Result<T, E>` where `E` can become a chain cause.
pub trait RailExt<T, E> {
    /// Returns the value or terminates the unit of work with the full report.
    ///
    /// # Panics
    ///
    /// Panics on `Err`.
    fn must(self) -> T;

    /// Calls `f` with the error on `Err`; returns `self` unchanged.
    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self;

    /// Calls `f` with the value on `Ok`; returns `self` unchanged.
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Converts the error into an error-only signal without decorating it.
    fn ensure<V>(self) -> Flow<T, V>;

    /// Decorates the error with `message` and converts it into an error-only
    /// signal.
    fn ensure_with<V, S: Into<String>>(self, message: S) -> Flow<T, V>;
}

impl<T, E: IntoCause> RailExt<T, E> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn must(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => terminate(&err.into_cause().into_chain()),
        }
    }

    #[inline]
    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(err) = &self {
            f(err);
        }
        self
    }

    #[inline]
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    fn ensure<V>(self) -> Flow<T, V> {
        self.map_err(|err| Signal::ErrorOnly(err.into_cause().into_chain()))
    }

    #[inline]
    fn ensure_with<V, S: Into<String>>(self, message: S) -> Flow<T, V> {
        self.map_err(|err| Signal::ErrorOnly(decorate_cause(err.into_cause(), message)))
    }
}
