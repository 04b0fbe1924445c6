//! Error types and rendering.
//!
//! This module provides the immutable chain model and its renderings.
//!
//! # Examples
//!
//! ```
//! use cause_rail::{ChainedError, ForeignError};
//!
//! let err = ChainedError::caused_by("loading config", ForeignError::new("file not found"));
//!
//! assert_eq!(err.to_string(), "file not found -> loading config");
//! assert_eq!(err.root_message(), "file not found");
//! ```
pub(crate) mod alloc_type;
pub mod chained_error;
pub mod configuration_error;
pub mod foreign_error;
pub mod report;

pub use chained_error::*;
pub use configuration_error::*;
pub use foreign_error::*;
pub use report::*;

/// Result alias for computations that fail with a [`ChainedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type Outcome<T> = Result<T, ChainedError>;
