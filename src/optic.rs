//! The runtime-tagged optic sum type.
//!
//! [`Optic`] wraps a [`Lens`], [`Prism`], or [`Iso`] behind a single type
//! with an explicit discriminator, for code that carries heterogeneous
//! optics or selects them at runtime. Its [`compose`](Optic::compose)
//! dispatches on the pair of tags and re-tags the result according to the
//! same fixed table the static [`Compose`](crate::Compose) impls enforce;
//! because the match over the tag pair is total, no unsupported combination
//! exists.
//!
//! # Example
//!
//! ```
//! use refract::{Optic, OpticKind};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address: Optic<Person, Address> = refract::lens!(Person, address).into();
//! let city: Optic<Address, String> = refract::lens!(Address, city).into();
//!
//! let person_city = address.compose(city);
//! assert_eq!(person_city.kind(), OpticKind::Lens);
//!
//! let person = Person {
//!     name: "John".to_string(),
//!     address: Address { city: "NYC".to_string() },
//! };
//! assert_eq!(person_city.preview(&person), Some("NYC".to_string()));
//! ```

use std::fmt;

use static_assertions::assert_impl_all;

use crate::compose::Compose;
use crate::iso::Iso;
use crate::lens::Lens;
use crate::prism::Prism;
use crate::update::Update;

/// The discriminator carried by an [`Optic`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OpticKind {
    /// A total get/set optic over a field that always exists.
    Lens,
    /// A partial optic over a branch that may be absent.
    Prism,
    /// A total bidirectional conversion.
    Iso,
}

impl fmt::Display for OpticKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Lens => "Lens",
            Self::Prism => "Prism",
            Self::Iso => "Iso",
        })
    }
}

/// An optic tagged with its kind at runtime.
///
/// All three kinds are pure function bundles over immutable values: an
/// `Optic` is stateless, cheap to clone, and safe to share across threads.
pub enum Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    /// A lens over a field that always exists.
    Lens(Lens<S, A>),
    /// A prism over a branch that may be absent.
    Prism(Prism<S, A>),
    /// An isomorphism between two representations.
    Iso(Iso<S, A>),
}

impl<S, A> Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Returns the kind tag of this optic.
    #[must_use]
    pub const fn kind(&self) -> OpticKind {
        match self {
            Self::Lens(_) => OpticKind::Lens,
            Self::Prism(_) => OpticKind::Prism,
            Self::Iso(_) => OpticKind::Iso,
        }
    }

    /// Attempts to get the focused value.
    ///
    /// For a lens or an iso the result is always `Some`; for a prism (or any
    /// composition that contains one) the focused branch may be absent.
    #[must_use]
    pub fn preview(&self, source: &S) -> Option<A> {
        match self {
            Self::Lens(lens) => Some(lens.get(source)),
            Self::Prism(prism) => prism.preview(source),
            Self::Iso(iso) => Some(iso.get(source)),
        }
    }

    /// Sets the focused value from an [`Update`], returning a new source.
    ///
    /// Each kind applies its own semantics: a lens always writes, a prism
    /// applies the literal-materializes / function-no-ops asymmetry, and an
    /// iso converts the new value back to the source representation.
    #[must_use]
    pub fn set(&self, source: S, update: Update<A>) -> S {
        match self {
            Self::Lens(lens) => lens.set(source, update),
            Self::Prism(prism) => prism.set(source, update),
            Self::Iso(iso) => match update {
                Update::Put(value) => iso.reverse_get(&value),
                Update::Modify(function) => iso.reverse_get(&function(iso.get(&source))),
            },
        }
    }

    /// Replaces the focused value with a literal.
    #[must_use]
    pub fn put(&self, source: S, value: A) -> S {
        self.set(source, Update::Put(value))
    }

    /// Transforms the focused value with a pure function.
    ///
    /// A no-op when the focused branch is absent.
    #[must_use]
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A + 'static,
    {
        self.set(source, Update::modify(function))
    }

    /// Composes this optic with an inner one, dispatching on the tag pair.
    ///
    /// The kind of the result follows the fixed table:
    ///
    /// ```text
    /// outer \ inner   Lens    Prism   Iso
    /// Lens            Lens    Prism   Lens
    /// Prism           Prism   Prism   Prism
    /// Iso             Lens    Prism   Iso
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use refract::{identity, Optic, OpticKind};
    ///
    /// let outer: Optic<i32, i32> = identity().into();
    /// let inner: Optic<i32, i32> = identity().into();
    /// assert_eq!(outer.compose(inner).kind(), OpticKind::Iso);
    /// ```
    #[must_use]
    pub fn compose<B>(self, inner: Optic<A, B>) -> Optic<S, B>
    where
        B: 'static,
    {
        match (self, inner) {
            (Self::Lens(outer), Optic::Lens(inner)) => Optic::Lens(outer.compose(inner)),
            (Self::Lens(outer), Optic::Prism(inner)) => Optic::Prism(outer.compose(inner)),
            (Self::Lens(outer), Optic::Iso(inner)) => Optic::Lens(outer.compose(inner)),
            (Self::Prism(outer), Optic::Lens(inner)) => Optic::Prism(outer.compose(inner)),
            (Self::Prism(outer), Optic::Prism(inner)) => Optic::Prism(outer.compose(inner)),
            (Self::Prism(outer), Optic::Iso(inner)) => Optic::Prism(outer.compose(inner)),
            (Self::Iso(outer), Optic::Lens(inner)) => Optic::Lens(outer.compose(inner)),
            (Self::Iso(outer), Optic::Prism(inner)) => Optic::Prism(outer.compose(inner)),
            (Self::Iso(outer), Optic::Iso(inner)) => Optic::Iso(outer.compose(inner)),
        }
    }
}

/// Type-level access to an optic's source and target types.
///
/// Generic code handed an optic value can name the outer type it reads from
/// and the type it focuses without threading extra type parameters.
///
/// # Associated Types
///
/// - `Source`: The whole structure the optic operates on.
/// - `Target`: The focused value.
///
/// # Example
///
/// ```rust
/// use refract::OpticTypes;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// fn assert_focuses_i32<O: OpticTypes<Target = i32>>(_: &O) {}
///
/// let x_lens = refract::lens!(Point, x);
/// assert_focuses_i32(&x_lens);
/// ```
pub trait OpticTypes {
    /// The source type the optic reads from and writes back to.
    type Source;
    /// The focused type the optic gets and sets.
    type Target;
}

impl<S, A> OpticTypes for Lens<S, A>
where
    S: 'static,
    A: 'static,
{
    type Source = S;
    type Target = A;
}

impl<S, A> OpticTypes for Prism<S, A>
where
    S: 'static,
    A: 'static,
{
    type Source = S;
    type Target = A;
}

impl<S, A> OpticTypes for Iso<S, A>
where
    S: 'static,
    A: 'static,
{
    type Source = S;
    type Target = A;
}

impl<S, A> OpticTypes for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    type Source = S;
    type Target = A;
}

impl<S, A> From<Lens<S, A>> for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    fn from(lens: Lens<S, A>) -> Self {
        Self::Lens(lens)
    }
}

impl<S, A> From<Prism<S, A>> for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    fn from(prism: Prism<S, A>) -> Self {
        Self::Prism(prism)
    }
}

impl<S, A> From<Iso<S, A>> for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    fn from(iso: Iso<S, A>) -> Self {
        Self::Iso(iso)
    }
}

impl<S, A> Clone for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
            Self::Iso(iso) => Self::Iso(iso.clone()),
        }
    }
}

impl<S, A> fmt::Debug for Optic<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lens(lens) => formatter.debug_tuple("Lens").field(lens).finish(),
            Self::Prism(prism) => formatter.debug_tuple("Prism").field(prism).finish(),
            Self::Iso(iso) => formatter.debug_tuple("Iso").field(iso).finish(),
        }
    }
}

// Optics are stateless function bundles; sharing them across threads is part
// of the contract.
assert_impl_all!(Lens<String, u32>: Clone, Send, Sync);
assert_impl_all!(Prism<String, u32>: Clone, Send, Sync);
assert_impl_all!(Iso<String, u32>: Clone, Send, Sync);
assert_impl_all!(Optic<String, u32>: Clone, Send, Sync);
