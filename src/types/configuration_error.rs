//! Misuse of the propagation API.

use core::fmt::{self, Display};

/// A programmer error detected while setting up a recovery point.
///
/// Configuration errors are never delivered through a [`Signal`](crate::Signal);
/// they are returned directly to the code that misused the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A [`Boundary`](crate::Boundary) was created without an error output slot.
    MissingErrorSlot,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingErrorSlot => {
                f.write_str("boundary requires an error output slot")
            },
        }
    }
}

impl core::error::Error for ConfigurationError {}
