//! Small helpers over `(value, error)` pairs.
//!
//! - [`must`] terminates on any error; it is meant for setup failures where
//!   continuing is meaningless and is not interceptable by a [`Boundary`](crate::Boundary).
//! - [`on_error`] / [`on_success`] run a side effect on one branch and hand
//!   the pair back unchanged.

use crate::traits::IntoCause;
use crate::types::ChainedError;

/// Returns `value`, or terminates the unit of work if `err` is present.
///
/// # Panics
///
/// Panics with the full report of the error when `err` is `Some`.
///
/// # Examples
///
/// ```
/// use cause_rail::must;
///
/// let port = must(8080u16, None::<&str>);
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
#[inline]
pub fn must<T, E: IntoCause>(value: T, err: Option<E>) -> T {
    match err {
        None => value,
        Some(err) => terminate(&err.into_cause().into_chain()),
    }
}

/// Calls `f` with the error if one is present; returns the pair unchanged.
///
/// # Examples
///
/// ```
/// use cause_rail::on_error;
///
/// let mut seen = Vec::new();
/// let (value, err) = on_error(3, Some("late"), |e| seen.push(*e));
///
/// assert_eq!((value, err), (3, Some("late")));
/// assert_eq!(seen, ["late"]);
/// ```
#[inline]
pub fn on_error<T, E, F>(value: T, err: Option<E>, f: F) -> (T, Option<E>)
where
    F: FnOnce(&E),
{
    if let Some(err) = &err {
        f(err);
    }
    (value, err)
}

/// Calls `f` with the value if no error is present; returns the pair unchanged.
#[inline]
pub fn on_success<T, E, F>(value: T, err: Option<E>, f: F) -> (T, Option<E>)
where
    F: FnOnce(&T),
{
    if err.is_none() {
        f(&value);
    }
    (value, err)
}

#[cold]
#[track_caller]
pub(crate) fn terminate(error: &ChainedError) -> ! {
    panic!("{error:#}")
}
