//! Tracing integration for cause-rail.
//!
//! Nothing in the crate logs on its own. These helpers let callers record a
//! chain as a `tracing` event, or decorate a chain with the current span, at
//! the points where they choose to.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! cause-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::propagation::{Flow, Signal};
use crate::traits::IntoCause;
use crate::types::{ChainedError, Outcome};

/// Emits one `ERROR` event describing `error`.
///
/// Fields: `root` (root cause text), `depth` (number of links) and `chain`
/// (short form).
pub fn record_chain(error: &ChainedError) {
    tracing::error!(
        root = %error.root_message(),
        depth = error.depth(),
        chain = %error,
        "error chain recorded"
    );
}

/// Emits one `ERROR` event for a signal, noting whether it carries a value.
pub fn record_signal<V>(signal: &Signal<V>) {
    let error = signal.error();
    tracing::error!(
        root = %error.root_message(),
        depth = error.depth(),
        chain = %error,
        with_value = !signal.is_error_only(),
        "signal raised"
    );
}

/// Extension trait recording failures of `Outcome` and `Flow` results.
pub trait ResultTraceExt: Sized {
    /// Records the error, if any, and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T> ResultTraceExt for Outcome<T> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            record_chain(error);
        }
        self
    }
}

impl<T, V> ResultTraceExt for Flow<T, V> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(signal) = &self {
            record_signal(signal);
        }
        self
    }
}

/// Decorates `error` with the name of the current span.
///
/// # Example
///
/// ```rust,ignore
/// use cause_rail::tracing_ext::instrument_error;
///
/// let span = tracing::info_span!("load_user");
/// let _guard = span.enter();
/// let err = instrument_error("row missing");
/// // row missing -> in span 'load_user'
/// ```
pub fn instrument_error<E: IntoCause>(error: E) -> ChainedError {
    in_span(error, &Span::current())
}

/// Decorates `error` with the name of `span`.
pub fn in_span<E: IntoCause>(error: E, span: &Span) -> ChainedError {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    crate::decorate::decorate_cause(error.into_cause(), std::format!("in span '{}'", name))
}
