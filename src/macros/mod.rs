//! Ergonomic macros for building chains and raising signals.
//!
//! - [`macro@crate::chain`] - Builds a [`ChainedError`](crate::ChainedError)
//!   from format arguments, optionally on top of a cause.
//! - [`macro@crate::raise`] - Returns a raised [`Signal`](crate::Signal) from
//!   the current function.
//! - [`macro@crate::ensure`] - Raises an error-only signal when a condition
//!   does not hold.
//!
//! # Examples
//!
//! ```
//! use cause_rail::{chain, ensure, raise, Boundary, Flow};
//!
//! fn withdraw(balance: u32, amount: u32) -> Flow<u32, u32> {
//!     ensure!(amount > 0, "amount must be positive");
//!     if amount > balance {
//!         raise!(balance, chain!("insufficient funds: {} < {}", balance, amount));
//!     }
//!     Ok(balance - amount)
//! }
//!
//! let mut left = 0;
//! let mut error = None;
//! let _ = Boundary::with_slots(&mut left, &mut error).run(|| withdraw(10, 25));
//!
//! assert_eq!(left, 10);
//! assert_eq!(error.unwrap().message(), "insufficient funds: 10 < 25");
//! ```

/// Builds a [`ChainedError`](crate::ChainedError) from format arguments.
///
/// # Syntax
///
/// - `chain!("fmt", args..)` - A root node
/// - `chain!(cause => "fmt", args..)` - A node decorating `cause`, which may be
///   anything implementing [`IntoCause`](crate::traits::IntoCause)
///
/// # Examples
///
/// ```
/// use cause_rail::chain;
///
/// let root = chain!("row {} missing", 7);
/// let top = chain!(root => "loading user {}", "ana");
///
/// assert_eq!(top.to_string(), "row 7 missing -> loading user ana");
/// ```
#[macro_export]
macro_rules! chain {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ChainedError::new($crate::__private::format!($fmt $(, $arg)*))
    };
    ($cause:expr => $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ChainedError::caused_by($crate::__private::format!($fmt $(, $arg)*), $cause)
    };
}

/// Returns a raised signal from the enclosing function.
///
/// - `raise!(value, error)` - Expands to `return raise(value, error)`
/// - `raise!(error)` - Expands to `return raise_err(error)`
///
/// The enclosing function must return a [`Flow`](crate::Flow).
#[macro_export]
macro_rules! raise {
    ($value:expr, $err:expr $(,)?) => {
        return $crate::raise($value, $err)
    };
    ($err:expr $(,)?) => {
        return $crate::raise_err($err)
    };
}

/// Raises an error-only signal built with [`chain!`](crate::chain) unless
/// `cond` holds.
///
/// # Examples
///
/// ```
/// use cause_rail::{ensure, Flow};
///
/// fn check(len: usize) -> Flow<usize> {
///     ensure!(len <= 4, "too long: {}", len);
///     Ok(len)
/// }
///
/// assert!(check(3).is_ok());
/// assert_eq!(check(9).unwrap_err().error().message(), "too long: 9");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if !$cond {
            return $crate::raise_err($crate::chain!($fmt $(, $arg)*));
        }
    };
}
