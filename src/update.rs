//! Updater normalization for `set` operations.
//!
//! Every optic's `set` accepts either a literal replacement value or a pure
//! update function. [`Update`] is the tagged union that disambiguates the
//! two: callers never have to special-case function updaters, and composed
//! optics can stay agnostic about which form the original caller supplied.
//!
//! The disambiguation itself happens inside each optic's own setter, at the
//! point closest to where the current value is known. Composition threads an
//! `Update` through untouched (or wraps it) and lets the primitive decide.
//!
//! # Example
//!
//! ```
//! use refract::{Lens, Update};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = refract::lens!(Point, x);
//! let point = Point { x: 10, y: 20 };
//!
//! // Literal replacement
//! let replaced = x_lens.set(point.clone(), Update::Put(100));
//! assert_eq!(replaced.x, 100);
//!
//! // Functional update
//! let doubled = x_lens.set(point, Update::modify(|x| x * 2));
//! assert_eq!(doubled.x, 20);
//! ```

use std::fmt;
use std::sync::Arc;

/// The argument accepted by every optic's `set`.
///
/// A `Put` carries a literal replacement value; a `Modify` carries a pure
/// function applied to the current focused value. The two are deliberately
/// asymmetric across missing branches: a `Put` always delegates to the
/// owning optic's setter (which may materialize an absent branch), while a
/// `Modify` is a no-op whenever there is no current value to feed it.
pub enum Update<A> {
    /// Replace the focused value with a literal.
    Put(A),
    /// Transform the current focused value with a pure function.
    Modify(Box<dyn FnOnce(A) -> A>),
}

impl<A> Update<A> {
    /// Creates a literal replacement update.
    ///
    /// Equivalent to `Update::Put(value)`.
    #[must_use]
    pub const fn put(value: A) -> Self {
        Self::Put(value)
    }

    /// Creates a functional update from a pure function.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Update;
    ///
    /// let update = Update::modify(|x: i32| x + 1);
    /// assert_eq!(update.apply(41), 42);
    /// ```
    #[must_use]
    pub fn modify<F>(function: F) -> Self
    where
        F: FnOnce(A) -> A + 'static,
    {
        Self::Modify(Box::new(function))
    }

    /// Resolves this update against the current focused value.
    ///
    /// A `Put` ignores the current value and yields its literal; a `Modify`
    /// applies its function to the current value.
    #[must_use]
    pub fn apply(self, current: A) -> A {
        match self {
            Self::Put(value) => value,
            Self::Modify(function) => function(current),
        }
    }

    /// Returns `true` if this update is a literal replacement.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self, Self::Put(_))
    }

    /// Returns `true` if this update is a functional update.
    #[must_use]
    pub const fn is_modify(&self) -> bool {
        matches!(self, Self::Modify(_))
    }
}

impl<A: fmt::Debug> fmt::Debug for Update<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Put(value) => formatter.debug_tuple("Put").field(value).finish(),
            Self::Modify(_) => formatter.write_str("Modify(..)"),
        }
    }
}

// Shared function-bundle shapes for the optic types.
pub(crate) type Getter<S, A> = Arc<dyn Fn(&S) -> A + Send + Sync>;
pub(crate) type OptionGetter<S, A> = Arc<dyn Fn(&S) -> Option<A> + Send + Sync>;
pub(crate) type Setter<S, A> = Arc<dyn Fn(S, Update<A>) -> S + Send + Sync>;
