//! Short-circuit propagation to a recovery point.
//!
//! A failure deep inside a computation is turned into a [`Signal`] and
//! returned as the `Err` side of a [`Flow`]. Every function between the
//! failure and the recovery point forwards it with `?`, so no intermediate
//! call site inspects it. The nearest enclosing [`Boundary`] receives the
//! signal and writes its payload into caller-owned slots.
//!
//! # Examples
//!
//! ```
//! use cause_rail::{raise, Boundary, ChainedError, Flow};
//!
//! fn read_header(bytes: &[u8]) -> Flow<u8, usize> {
//!     match bytes.first() {
//!         Some(&b) => Ok(b),
//!         None => raise(bytes.len(), ChainedError::new("empty input")),
//!     }
//! }
//!
//! fn decode(bytes: &[u8]) -> Flow<u8, usize> {
//!     let header = read_header(bytes)?;
//!     Ok(header + 1)
//! }
//!
//! let mut consumed = usize::MAX;
//! let mut error = None;
//! let exit = Boundary::with_slots(&mut consumed, &mut error).run(|| decode(&[]));
//!
//! assert!(exit.is_tripped());
//! assert_eq!(consumed, 0);
//! assert_eq!(error.unwrap().message(), "empty input");
//! ```

use crate::decorate::decorate_cause;
use crate::traits::IntoCause;
use crate::types::ChainedError;

pub mod boundary;

pub use boundary::{run_unit, Boundary, Exit};

/// Result alias for computations that may raise a [`Signal`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `V` - The value carried by a raised signal
pub type Flow<T, V = ()> = Result<T, Signal<V>>;

/// Payload transported from a raise site to the nearest [`Boundary`].
#[must_use = "a signal only reaches a boundary when it is returned"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<V> {
    /// A partial value together with the error that interrupted it.
    WithValue { value: V, error: ChainedError },
    /// An error without a value.
    ErrorOnly(ChainedError),
}

impl<V> Signal<V> {
    /// Returns the carried error.
    #[inline]
    pub fn error(&self) -> &ChainedError {
        match self {
            Signal::WithValue { error, .. } | Signal::ErrorOnly(error) => error,
        }
    }

    /// Returns the carried value, if any.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Signal::WithValue { value, .. } => Some(value),
            Signal::ErrorOnly(_) => None,
        }
    }

    #[inline]
    pub fn is_error_only(&self) -> bool {
        matches!(self, Signal::ErrorOnly(_))
    }

    /// Consumes the signal, returning its error.
    #[inline]
    pub fn into_error(self) -> ChainedError {
        self.into_parts().1
    }

    /// Consumes the signal, returning the optional value and the error.
    #[inline]
    pub fn into_parts(self) -> (Option<V>, ChainedError) {
        match self {
            Signal::WithValue { value, error } => (Some(value), error),
            Signal::ErrorOnly(error) => (None, error),
        }
    }

    /// Maps the carried value, keeping the error and the variant.
    #[inline]
    pub fn map_value<W, F>(self, f: F) -> Signal<W>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Signal::WithValue { value, error } => Signal::WithValue { value: f(value), error },
            Signal::ErrorOnly(error) => Signal::ErrorOnly(error),
        }
    }

    /// Drops the carried value so the signal can cross into a flow with a
    /// different value type.
    #[inline]
    pub fn without_value<W>(self) -> Signal<W> {
        Signal::ErrorOnly(self.into_error())
    }
}

impl<V> From<ChainedError> for Signal<V> {
    #[inline]
    fn from(error: ChainedError) -> Self {
        Signal::ErrorOnly(error)
    }
}

impl<V> From<Signal<V>> for ChainedError {
    #[inline]
    fn from(signal: Signal<V>) -> Self {
        signal.into_error()
    }
}

/// Raises `(value, error)` toward the nearest boundary.
///
/// Return it directly or apply `?`; either way nothing after the raise runs
/// in the raising scope. A foreign error is lifted to a root node carrying its
/// display text.
#[inline]
pub fn raise<T, V, E: IntoCause>(value: V, error: E) -> Flow<T, V> {
    Err(Signal::WithValue { value, error: error.into_cause().into_chain() })
}

/// Raises an error-only signal toward the nearest boundary.
#[inline]
pub fn raise_err<T, V, E: IntoCause>(error: E) -> Flow<T, V> {
    Err(Signal::ErrorOnly(error.into_cause().into_chain()))
}

/// Passes `value` through, or raises it with its error decorated by an empty
/// message.
///
/// # Examples
///
/// ```
/// use cause_rail::{ensure_no_error, Boundary, Flow};
///
/// fn step(input: Option<&'static str>) -> Flow<u32, u32> {
///     let n = ensure_no_error(7, input)?;
///     Ok(n * 2)
/// }
///
/// let mut value = 0;
/// let mut error = None;
/// let _ = Boundary::with_slots(&mut value, &mut error).run(|| step(Some("bad input")));
///
/// assert_eq!(value, 7);
/// assert_eq!(error.unwrap().root_message(), "bad input");
/// ```
#[inline]
pub fn ensure_no_error<T, E: IntoCause>(value: T, err: Option<E>) -> Flow<T, T> {
    match err {
        None => Ok(value),
        Some(err) => Err(Signal::WithValue { value, error: decorate_cause(err.into_cause(), "") }),
    }
}
