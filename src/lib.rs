//! Immutable causal error chains and boundary-scoped short-circuit propagation.
//!
//! A [`ChainedError`] pairs a message with an optional cause and remembers the
//! root of its chain. It renders as a one-line short form (`{}`) or as a full
//! report with the root cause and a trace (`{:#}` or [`ChainedError::report`]).
//!
//! Failures travel to a recovery point as a [`Signal`] on the `Err` side of a
//! [`Flow`]: intermediate functions forward it with `?`, and the nearest
//! [`Boundary`] writes its payload into caller-owned slots.
//!
//! # Examples
//!
//! ## Building and rendering a chain
//!
//! ```
//! use cause_rail::ChainedError;
//!
//! let err = ChainedError::new("some root error").wrap("some caused error");
//!
//! assert_eq!(err.to_string(), "some root error -> some caused error");
//! assert_eq!(
//!     format!("{err:#}"),
//!     "error:\n\tsome caused error\n\n\
//!      Root cause:\n\tsome root error\n\n\
//!      Full error trace:\n\tsome caused error\n\tcaused by: some root error",
//! );
//! ```
//!
//! ## Short-circuiting to a boundary
//!
//! ```
//! use cause_rail::{decorate, raise, Boundary, Flow};
//!
//! fn fetch() -> (Vec<u8>, Option<&'static str>) {
//!     (vec![1, 2], Some("connection reset"))
//! }
//!
//! fn download() -> Flow<Vec<u8>, Vec<u8>> {
//!     let (bytes, err) = fetch();
//!     match decorate(bytes, err, "downloading") {
//!         (bytes, None) => Ok(bytes),
//!         (bytes, Some(err)) => raise(bytes, err),
//!     }
//! }
//!
//! fn sync() -> Flow<usize, Vec<u8>> {
//!     let bytes = download()?;
//!     Ok(bytes.len())
//! }
//!
//! let mut partial = Vec::new();
//! let mut error = None;
//! let exit = Boundary::with_slots(&mut partial, &mut error).run(sync);
//!
//! assert!(exit.is_tripped());
//! assert_eq!(partial, [1, 2]);
//! assert_eq!(error.unwrap().to_string(), "connection reset -> downloading");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Helpers over `(value, error)` pairs
pub mod combinators;
/// Decoration of `(value, error)` pairs with new chain nodes
pub mod decorate;
/// Macros for building chains and raising signals
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Signals, flows and boundaries
pub mod propagation;
/// Core traits for building and propagating chains
pub mod traits;
/// ChainedError, ForeignError and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use combinators::*;
pub use decorate::{decorate, with_cause};
pub use propagation::*;
pub use traits::*;
pub use types::{
    Cause, CauseRef, ChainedError, ConfigurationError, ForeignError, Frame, FrameKind, Outcome,
    ReportBuilder, ReportConfig,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
