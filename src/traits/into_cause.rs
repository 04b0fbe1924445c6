//! Trait for converting error values into a [`Cause`].
//!
//! This trait gives every entry point of the crate one way to accept either a
//! chain node or an error produced elsewhere.
//!
//! # Implementations
//!
//! - `ChainedError` / `&ChainedError` - become [`Cause::Chained`]
//! - `ForeignError`, `String`, `&str`, `Cow<'static, str>` - become [`Cause::Foreign`]
//! - `Box<dyn Error + Send + Sync>` - a foreign leaf holding its display text
//! - `std::io::Error` (feature `std`) - a foreign leaf holding its display text
//!
//! # Examples
//!
//! ```
//! use cause_rail::{traits::IntoCause, Cause, ChainedError};
//!
//! let foreign = "disk full".into_cause();
//! let chained = ChainedError::new("write failed").into_cause();
//!
//! assert!(foreign.as_foreign().is_some());
//! assert!(matches!(chained, Cause::Chained(_)));
//! ```
use crate::types::alloc_type::{Box, Cow, String};
use crate::types::{Cause, ChainedError, ForeignError};

/// Converts a value into a [`Cause`] for chain construction.
///
/// # Implementing for Custom Types
///
/// ```
/// use cause_rail::{traits::IntoCause, Cause, ForeignError};
///
/// struct Timeout { millis: u64 }
///
/// impl IntoCause for Timeout {
///     fn into_cause(self) -> Cause {
///         Cause::Foreign(ForeignError::from_display(format!("timed out after {}ms", self.millis)))
///     }
/// }
///
/// assert_eq!(Timeout { millis: 30 }.into_cause().to_string(), "timed out after 30ms");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error cause",
    label = "this type does not implement `IntoCause`",
    note = "wrap the value with `ForeignError::new(&value)` or implement `IntoCause`"
)]
pub trait IntoCause {
    /// Converts `self` into a [`Cause`].
    fn into_cause(self) -> Cause;
}

impl IntoCause for Cause {
    /// Identity conversion.
    #[inline]
    fn into_cause(self) -> Cause {
        self
    }
}

impl IntoCause for ChainedError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Chained(self)
    }
}

impl IntoCause for &ChainedError {
    /// Shares the node; chains are immutable so no copy is made.
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Chained(self.clone())
    }
}

impl IntoCause for ForeignError {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Foreign(self)
    }
}

impl IntoCause for String {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Foreign(ForeignError::from_display(self))
    }
}

impl IntoCause for &str {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Foreign(ForeignError::from_display(self))
    }
}

impl IntoCause for Cow<'static, str> {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::Foreign(ForeignError::from_display(self.into_owned()))
    }
}

impl IntoCause for Box<dyn core::error::Error + Send + Sync> {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::foreign(&*self)
    }
}

impl IntoCause for core::fmt::Error {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::foreign(&self)
    }
}

#[cfg(feature = "std")]
impl IntoCause for std::io::Error {
    #[inline]
    fn into_cause(self) -> Cause {
        Cause::foreign(&self)
    }
}
