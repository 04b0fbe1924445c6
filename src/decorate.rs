//! Decoration of `(value, error)` pairs with a new chain node.
//!
//! Key features:
//! - [`decorate`] wraps an optional error in a new [`ChainedError`] while
//!   passing the value through untouched.
//! - [`with_cause`] is the curried form: bind the pair first, supply the
//!   message later.
//!
//! An absent error is a no-op: no node is allocated and the message is
//! dropped unused.

use crate::traits::IntoCause;
use crate::types::alloc_type::String;
use crate::types::{Cause, ChainedError};

/// Decorates `err` with `message`, passing `value` through.
///
/// - `None` returns `(value, None)` without allocating.
/// - A chained error gets a new top node and keeps its root.
/// - A foreign error becomes a two-level chain: an inner root node carrying
///   the foreign display text and an outer node carrying `message`.
///
/// # Examples
///
/// ```
/// use cause_rail::{decorate, ChainedError};
///
/// let root = ChainedError::new("connection reset");
/// let (value, err) = decorate(0u8, Some(root.clone()), "fetching page");
///
/// assert_eq!(value, 0);
/// let err = err.unwrap();
/// assert_eq!(err.to_string(), "connection reset -> fetching page");
/// assert!(err.root().as_chained().is_some_and(|r| r.ptr_eq(&root)));
///
/// let (_, none) = decorate(1u8, None::<ChainedError>, "unused");
/// assert!(none.is_none());
/// ```
#[inline]
pub fn decorate<T, E, S>(value: T, err: Option<E>, message: S) -> (T, Option<ChainedError>)
where
    E: IntoCause,
    S: Into<String>,
{
    match err {
        None => (value, None),
        Some(err) => (value, Some(decorate_cause(err.into_cause(), message))),
    }
}

/// Binds a `(value, error)` pair and returns a closure that decorates it.
///
/// # Examples
///
/// ```
/// use cause_rail::with_cause;
///
/// fn lookup() -> (u32, Option<&'static str>) {
///     (0, Some("key not found"))
/// }
///
/// let (value, err) = lookup();
/// let (_, err) = with_cause(value, err)("reading cache");
/// assert_eq!(err.unwrap().report().lines().last(), Some("\tcaused by: key not found"));
/// ```
#[inline]
pub fn with_cause<T, E, S>(value: T, err: Option<E>) -> impl FnOnce(S) -> (T, Option<ChainedError>)
where
    E: IntoCause,
    S: Into<String>,
{
    move |message| decorate(value, err, message)
}

pub(crate) fn decorate_cause<S: Into<String>>(cause: Cause, message: S) -> ChainedError {
    match cause {
        Cause::Chained(chained) => ChainedError::caused_by(message, chained),
        Cause::Foreign(foreign) => {
            ChainedError::caused_by(message, ChainedError::new(foreign.into_display()))
        },
    }
}
