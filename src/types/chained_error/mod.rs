//! Immutable causal error chains.
//!
//! This module provides [`ChainedError`], a node pairing a message with an
//! optional [`Cause`]. Nodes are shared behind an `Arc`, never mutated after
//! construction, and remember the root of their chain:
//! - a node without a cause is its own root
//! - a node caused by another chain inherits that chain's root
//! - a node caused by a [`ForeignError`] uses the foreign error as its root
//!
//! # Examples
//!
//! ```
//! use cause_rail::ChainedError;
//!
//! let root = ChainedError::new("some error");
//! let top = ChainedError::caused_by("some other error", root.clone());
//!
//! assert_eq!(top.to_string(), "some error -> some other error");
//! assert!(top.root().as_chained().is_some_and(|r| r.ptr_eq(&root)));
//! ```

use crate::traits::IntoCause;
use crate::types::alloc_type::{Arc, String};
use crate::types::ForeignError;
use core::fmt::{self, Display};

mod traits;

/// One link of an error chain: a decoration message plus an optional cause.
///
/// Cloning is cheap and yields a handle to the same node; use
/// [`ptr_eq`](Self::ptr_eq) to test node identity and `==` to compare
/// chains structurally.
#[must_use]
#[derive(Clone)]
pub struct ChainedError {
    node: Arc<Node>,
}

struct Node {
    message: String,
    cause: Option<Cause>,
    // `None` means the node is its own root.
    root: Option<Cause>,
}

/// The cause of a [`ChainedError`]: either another chain or a foreign leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// A cause that is itself part of the chain model.
    Chained(ChainedError),
    /// An opaque error from outside the model.
    Foreign(ForeignError),
}

/// Borrowed view of a single link, as yielded by [`ChainedError::iter`] and
/// returned by [`ChainedError::root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseRef<'a> {
    /// A chain node.
    Chained(&'a ChainedError),
    /// A foreign leaf.
    Foreign(&'a ForeignError),
}

impl ChainedError {
    /// Creates a root node: no cause, and the node is its own root.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { node: Arc::new(Node { message: message.into(), cause: None, root: None }) }
    }

    /// Creates a node decorating `cause` with `message`.
    ///
    /// The root is taken from the cause once, here, and never recomputed.
    pub fn caused_by<S, C>(message: S, cause: C) -> Self
    where
        S: Into<String>,
        C: IntoCause,
    {
        let cause = cause.into_cause();
        let root = match &cause {
            Cause::Chained(inner) => Some(inner.root_handle()),
            Cause::Foreign(foreign) => Some(Cause::Foreign(foreign.clone())),
        };
        Self { node: Arc::new(Node { message: message.into(), cause: Some(cause), root }) }
    }

    /// Extends this chain with a new top node carrying `message`.
    #[inline]
    pub fn wrap<S: Into<String>>(self, message: S) -> Self {
        Self::caused_by(message, self)
    }

    /// Returns the message added at this level.
    #[inline]
    pub fn message(&self) -> &str {
        &self.node.message
    }

    /// Returns the direct cause, or `None` for a root node.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.node.cause.as_ref()
    }

    /// Returns `true` when this node has no cause.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node.cause.is_none()
    }

    /// Returns the root cause of the chain.
    #[inline]
    pub fn root(&self) -> CauseRef<'_> {
        match &self.node.root {
            None => CauseRef::Chained(self),
            Some(root) => root.as_cause_ref(),
        }
    }

    /// Returns the display text of the root cause.
    #[inline]
    pub fn root_message(&self) -> &str {
        self.root().message()
    }

    /// Returns `true` if both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Walks the chain from this node down to its innermost cause.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(CauseRef::Chained(self)) }
    }

    /// Number of links in the chain, including a trailing foreign leaf.
    #[inline]
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    fn root_handle(&self) -> Cause {
        match &self.node.root {
            None => Cause::Chained(self.clone()),
            Some(root) => root.clone(),
        }
    }
}

impl Cause {
    /// Wraps any displayable value as a foreign leaf.
    #[inline]
    pub fn foreign<D: Display + ?Sized>(error: &D) -> Self {
        Cause::Foreign(ForeignError::new(error))
    }

    /// Returns the chain node, if this cause is one.
    #[inline]
    pub fn as_chained(&self) -> Option<&ChainedError> {
        match self {
            Cause::Chained(chained) => Some(chained),
            Cause::Foreign(_) => None,
        }
    }

    /// Returns the foreign leaf, if this cause is one.
    #[inline]
    pub fn as_foreign(&self) -> Option<&ForeignError> {
        match self {
            Cause::Chained(_) => None,
            Cause::Foreign(foreign) => Some(foreign),
        }
    }

    /// Borrows this cause as a [`CauseRef`].
    #[inline]
    pub fn as_cause_ref(&self) -> CauseRef<'_> {
        match self {
            Cause::Chained(chained) => CauseRef::Chained(chained),
            Cause::Foreign(foreign) => CauseRef::Foreign(foreign),
        }
    }

    /// Lifts this cause into a chain.
    ///
    /// A foreign leaf becomes a root node whose message is its display text.
    #[inline]
    pub fn into_chain(self) -> ChainedError {
        match self {
            Cause::Chained(chained) => chained,
            Cause::Foreign(foreign) => ChainedError::new(foreign.into_display()),
        }
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Chained(chained) => Display::fmt(chained, f),
            Cause::Foreign(foreign) => Display::fmt(foreign, f),
        }
    }
}

impl<'a> CauseRef<'a> {
    /// The chain node's message or the foreign error's display text.
    #[inline]
    pub fn message(&self) -> &'a str {
        match *self {
            CauseRef::Chained(chained) => chained.message(),
            CauseRef::Foreign(foreign) => foreign.display(),
        }
    }

    /// Returns the chain node, if this link is one.
    #[inline]
    pub fn as_chained(&self) -> Option<&'a ChainedError> {
        match *self {
            CauseRef::Chained(chained) => Some(chained),
            CauseRef::Foreign(_) => None,
        }
    }

    /// Returns `true` for a foreign leaf.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self, CauseRef::Foreign(_))
    }

    // Compares a single link without following its cause.
    fn same_link(&self, other: &CauseRef<'_>) -> bool {
        match (self, other) {
            (CauseRef::Chained(a), CauseRef::Chained(b)) => a.message() == b.message(),
            (CauseRef::Foreign(a), CauseRef::Foreign(b)) => a == b,
            _ => false,
        }
    }
}

/// Iterator over the links of a chain, outermost first.
///
/// Created by [`ChainedError::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<CauseRef<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = CauseRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let CauseRef::Chained(chained) = current {
            self.next = chained.cause().map(Cause::as_cause_ref);
        }
        Some(current)
    }
}

impl<'a> IntoIterator for &'a ChainedError {
    type Item = CauseRef<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for ChainedError {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(CauseRef::Chained(a)), Some(CauseRef::Chained(b))) if a.ptr_eq(b) => {
                    return true
                },
                (Some(a), Some(b)) if a.same_link(&b) => {},
                _ => return false,
            }
        }
    }
}

impl Eq for ChainedError {}

impl Drop for Node {
    // Unlinks uniquely owned causes one at a time so long chains do not
    // recurse through nested `Arc` drops.
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(Cause::Chained(chained)) = next {
            next = match Arc::try_unwrap(chained.node) {
                Ok(mut node) => node.cause.take(),
                Err(_) => None,
            };
        }
    }
}
