//! Recovery points for raised signals.

use crate::propagation::{Flow, Signal};
use crate::types::{ChainedError, ConfigurationError};

/// A single-use recovery point with caller-owned output slots.
///
/// A boundary is armed when constructed. [`run`](Self::run) consumes it and
/// executes the governed scope: a normal return leaves both slots untouched,
/// a raised [`Signal`] is copied into the slots and never propagated further.
/// Boundaries nest naturally; the innermost `run` on the call path receives
/// the signal.
///
/// # Examples
///
/// ```
/// use cause_rail::{raise_err, Boundary, ChainedError, Flow};
///
/// fn inner() -> Flow<(), ()> {
///     raise_err(ChainedError::new("inner failure"))
/// }
///
/// let mut outer_err = None;
/// let mut inner_err = None;
/// let _ = Boundary::errors_only(&mut outer_err).run(|| {
///     let _ = Boundary::errors_only(&mut inner_err).run(inner);
///     Ok::<_, cause_rail::Signal<()>>(())
/// });
///
/// assert!(outer_err.is_none());
/// assert_eq!(inner_err.unwrap().message(), "inner failure");
/// ```
#[must_use = "a boundary does nothing until `run` is called"]
#[derive(Debug)]
pub struct Boundary<'a, V> {
    value_slot: Option<&'a mut V>,
    error_slot: &'a mut Option<ChainedError>,
}

impl<'a, V> Boundary<'a, V> {
    /// Arms a boundary over the given slots.
    ///
    /// The error slot is mandatory; omitting it fails before any signal can
    /// be intercepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingErrorSlot`] when `error_slot` is
    /// `None`.
    #[inline]
    pub fn new(
        value_slot: Option<&'a mut V>,
        error_slot: Option<&'a mut Option<ChainedError>>,
    ) -> Result<Self, ConfigurationError> {
        let error_slot = error_slot.ok_or(ConfigurationError::MissingErrorSlot)?;
        Ok(Self { value_slot, error_slot })
    }

    /// Arms a boundary that records both the value and the error.
    #[inline]
    pub fn with_slots(value_slot: &'a mut V, error_slot: &'a mut Option<ChainedError>) -> Self {
        Self { value_slot: Some(value_slot), error_slot }
    }

    /// Arms a boundary that records only the error; carried values are dropped.
    #[inline]
    pub fn errors_only(error_slot: &'a mut Option<ChainedError>) -> Self {
        Self { value_slot: None, error_slot }
    }

    /// Runs `scope` under this boundary.
    #[inline]
    pub fn run<T, F>(mut self, scope: F) -> Exit<T>
    where
        F: FnOnce() -> Flow<T, V>,
    {
        match scope() {
            Ok(output) => Exit::Completed(output),
            Err(signal) => {
                self.trip(signal);
                Exit::Tripped
            },
        }
    }

    fn trip(&mut self, signal: Signal<V>) {
        match signal {
            Signal::WithValue { value, error } => {
                if let Some(slot) = self.value_slot.as_mut() {
                    **slot = value;
                }
                *self.error_slot = Some(error);
            },
            Signal::ErrorOnly(error) => *self.error_slot = Some(error),
        }
    }
}

/// How a [`Boundary`]'s governed scope ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit<T> {
    /// The scope returned normally; the slots were left untouched.
    Completed(T),
    /// A signal was intercepted and its payload written to the slots.
    Tripped,
}

impl<T> Exit<T> {
    #[inline]
    pub fn is_tripped(&self) -> bool {
        matches!(self, Exit::Tripped)
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Exit::Completed(_))
    }

    /// Returns the scope's output if it completed normally.
    #[inline]
    pub fn completed(self) -> Option<T> {
        match self {
            Exit::Completed(output) => Some(output),
            Exit::Tripped => None,
        }
    }
}

/// Runs the outermost scope of a unit of work.
///
/// A signal that reaches this point escaped every boundary; the unit of work
/// is terminated by panicking with the full report of its error.
///
/// # Panics
///
/// Panics if `scope` returns a [`Signal`].
///
/// # Examples
///
/// ```should_panic
/// use cause_rail::{raise_err, run_unit, ChainedError, Flow};
///
/// fn job() -> Flow<(), ()> {
///     raise_err(ChainedError::new("nobody is listening"))
/// }
///
/// run_unit(job);
/// ```
#[track_caller]
pub fn run_unit<T, V, F>(scope: F) -> T
where
    F: FnOnce() -> Flow<T, V>,
{
    match scope() {
        Ok(output) => output,
        Err(signal) => crate::combinators::terminate(signal.error()),
    }
}
