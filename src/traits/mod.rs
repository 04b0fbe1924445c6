//! Core traits for building and propagating chains.
//!
//! - [`IntoCause`]: Conversion of chain nodes and foreign errors into a [`Cause`](crate::Cause)
//! - [`WithCause`]: Decoration of a `Result`'s error with a new chain node
//! - [`RailExt`]: `must`, `on_error`, `on_success` and signal conversion on `Result`
//!
//! # Examples
//!
//! ```
//! use cause_rail::traits::{IntoCause, WithCause};
//! use cause_rail::ChainedError;
//!
//! let err = Err::<(), _>(ChainedError::new("disk full"))
//!     .with_cause("saving snapshot")
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "disk full -> saving snapshot");
//! assert!("plain text".into_cause().as_foreign().is_some());
//! ```

pub mod into_cause;
pub mod rail_ext;
pub mod with_cause;

pub use into_cause::IntoCause;
pub use rail_ext::RailExt;
pub use with_cause::WithCause;
