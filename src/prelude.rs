//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use cause_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`], [`raise!`], [`ensure!`]
//! - **Types**: [`ChainedError`], [`Cause`], [`ForeignError`], [`Signal`], [`Boundary`], [`Exit`]
//! - **Aliases**: [`Outcome`], [`Flow`]
//! - **Functions**: [`decorate`], [`raise`](crate::raise()), [`raise_err`], [`ensure_no_error`], [`must`], [`run_unit`]
//! - **Traits**: [`IntoCause`], [`WithCause`], [`RailExt`]
//!
//! # Examples
//!
//! ```
//! use cause_rail::prelude::*;
//!
//! fn load(path: &str) -> Outcome<String> {
//!     Err::<String, _>(format!("{path}: not found")).with_cause("loading configuration")
//! }
//!
//! let err = load("app.toml").unwrap_err();
//! assert_eq!(err.to_string(), "app.toml: not found -> loading configuration");
//! ```

// Macros (`raise` also brings in the function of the same name)
pub use crate::{chain, ensure, raise};

// Core types
pub use crate::propagation::{Boundary, Exit, Flow, Signal};
pub use crate::types::{Cause, ChainedError, ForeignError, Outcome};

// Functions
pub use crate::combinators::must;
pub use crate::decorate::decorate;
pub use crate::propagation::{ensure_no_error, raise_err, run_unit};

// Traits
pub use crate::traits::{IntoCause, RailExt, WithCause};
