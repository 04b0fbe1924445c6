//! Extension trait for decorating `Result` errors with a new chain node.
//!
//! # Examples
//!
//! ```
//! use cause_rail::traits::WithCause;
//! use cause_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .map_err(|e| e.to_string())
//!         .with_cause("parsing port")
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.message(), "parsing port");
//! assert_eq!(err.root_message(), "invalid digit found in string");
//! ```

use crate::decorate::decorate_cause;
use crate::traits::IntoCause;
use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Adds a chain node on top of a `Result`'s error.
///
/// Root handling matches [`decorate`](crate::decorate): a chained error keeps
/// its root, a foreign error becomes a two-level chain whose root carries the
/// foreign display text.
pub trait WithCause<T> {
    /// Decorates the error with `message`.
    fn with_cause<S: Into<String>>(self, message: S) -> Outcome<T>;

    /// Decorates the error with a message computed only on failure.
    fn with_cause_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: IntoCause> WithCause<T> for Result<T, E> {
    #[inline]
    fn with_cause<S: Into<String>>(self, message: S) -> Outcome<T> {
        self.map_err(|e| decorate_cause(e.into_cause(), message))
    }

    #[inline]
    fn with_cause_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| decorate_cause(e.into_cause(), f()))
    }
}
