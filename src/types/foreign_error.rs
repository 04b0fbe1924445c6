//! Opaque leaf errors produced outside the chain model.

use crate::types::alloc_type::{Arc, String};
use core::fmt::{self, Display};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// An error value from outside the chain model, reduced to its display text.
///
/// A foreign error is always a leaf: whatever cause the original value had is
/// not reachable through this type, and rendering stops here. Clones share
/// one text buffer.
///
/// # Examples
///
/// ```
/// use cause_rail::ForeignError;
///
/// let err = ForeignError::new("connection refused");
/// assert_eq!(err.display(), "connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignError {
    display: Arc<str>,
}

impl ForeignError {
    /// Captures the display string of `error`.
    #[inline]
    pub fn new<D: Display + ?Sized>(error: &D) -> Self {
        Self { display: Arc::from(error.to_string()) }
    }

    /// Builds a foreign error from text that is already rendered.
    #[inline]
    pub fn from_display<S: Into<String>>(display: S) -> Self {
        let display: String = display.into();
        Self { display: Arc::from(display) }
    }

    /// Returns the captured display string.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Consumes the error, returning its display string.
    #[inline]
    pub fn into_display(self) -> String {
        String::from(&*self.display)
    }
}

impl Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl core::error::Error for ForeignError {}
