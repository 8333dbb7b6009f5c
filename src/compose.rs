//! The optic composition engine.
//!
//! Composing an outer optic `S -> A` with an inner optic `A -> B` yields an
//! optic `S -> B` whose kind is decided by a fixed table over the kinds of
//! the operands:
//!
//! ```text
//! outer \ inner   Lens    Prism   Iso
//! Lens            Lens    Prism   Lens
//! Prism           Prism   Prism   Prism
//! Iso             Lens    Prism   Iso
//! ```
//!
//! The table is a closed set: [`Compose`] has exactly nine implementations,
//! one per cell, so the output kind is checked and any ill-typed pairing
//! rejected at compile time. Composition never mutates its operands; it
//! produces a new optic value.
//!
//! Two rules thread through every Prism-producing cell:
//!
//! - a composed `get` returns `None` as soon as the outer branch is absent,
//!   without invoking the inner optic;
//! - a composed `set` is a no-op over a missing outer branch, whether the
//!   update is a literal or a function. The one place a literal can still
//!   materialize over a missing outer branch is Prism∘Iso, where the inner
//!   `reverse_get` builds the intermediate value from the literal alone and
//!   the outer prism's own setter decides the rest.
//!
//! # Example
//!
//! ```
//! use refract::{Compose, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address = refract::lens!(Person, address);
//! let city = refract::lens!(Address, city);
//! let person_city = address.compose(city);
//!
//! let person = Person {
//!     name: "John".to_string(),
//!     address: Address { street: "123".to_string(), city: "NYC".to_string() },
//! };
//!
//! assert_eq!(person_city.get(&person), "NYC");
//!
//! let moved = person_city.put(person, "LA".to_string());
//! assert_eq!(moved.address.city, "LA");
//! assert_eq!(moved.address.street, "123");
//! ```

use std::sync::Arc;

use crate::iso::Iso;
use crate::lens::Lens;
use crate::prism::Prism;
use crate::update::Update;

/// Composition of two optics into one.
///
/// `self` is the outer optic (`S -> A`), `inner` the inner one (`A -> B`);
/// the associated `Output` is the composed optic (`S -> B`) whose kind
/// follows the fixed table in the [module documentation](self).
pub trait Compose<Inner> {
    /// The kind of optic the composition produces.
    type Output;

    /// Composes `self` (outer) with `inner`, producing a new optic.
    #[must_use]
    fn compose(self, inner: Inner) -> Self::Output;
}

// Lens . Lens -> Lens
impl<S, A, B> Compose<Lens<A, B>> for Lens<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Lens<S, B>;

    fn compose(self, inner: Lens<A, B>) -> Lens<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.get(&outer_read.get(source)));
        let set = Arc::new(move |source: S, update: Update<B>| {
            let focused = inner.set(self.get(&source), update);
            self.set(source, Update::Put(focused))
        });
        Lens::from_parts(get, set)
    }
}

// Lens . Prism -> Prism
impl<S, A, B> Compose<Prism<A, B>> for Lens<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Prism<S, B>;

    fn compose(self, inner: Prism<A, B>) -> Prism<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.preview(&outer_read.get(source)));
        // The inner prism performs its own Put/Modify normalization on the
        // always-present outer value; a Modify over an absent inner branch
        // hands the outer value back unchanged.
        let set = Arc::new(move |source: S, update: Update<B>| {
            let focused = inner.set(self.get(&source), update);
            self.set(source, Update::Put(focused))
        });
        Prism::from_parts(get, set)
    }
}

// Lens . Iso -> Lens
impl<S, A, B> Compose<Iso<A, B>> for Lens<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Lens<S, B>;

    fn compose(self, inner: Iso<A, B>) -> Lens<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.get(&outer_read.get(source)));
        let set = Arc::new(move |source: S, update: Update<B>| match update {
            Update::Put(value) => self.set(source, Update::Put(inner.reverse_get(&value))),
            Update::Modify(function) => {
                let convert = inner.clone();
                self.set(
                    source,
                    Update::modify(move |current: A| {
                        convert.reverse_get(&function(convert.get(&current)))
                    }),
                )
            }
        });
        Lens::from_parts(get, set)
    }
}

// Prism . Lens -> Prism
impl<S, A, B> Compose<Lens<A, B>> for Prism<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Prism<S, B>;

    fn compose(self, inner: Lens<A, B>) -> Prism<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| {
            outer_read
                .preview(source)
                .map(|intermediate| inner_read.get(&intermediate))
        });
        let set = Arc::new(move |source: S, update: Update<B>| {
            match self.preview(&source) {
                // No-op on a missing outer branch, for Put and Modify alike.
                None => source,
                Some(intermediate) => {
                    let focused = inner.set(intermediate, update);
                    self.set(source, Update::Put(focused))
                }
            }
        });
        Prism::from_parts(get, set)
    }
}

// Prism . Prism -> Prism
impl<S, A, B> Compose<Prism<A, B>> for Prism<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Prism<S, B>;

    fn compose(self, inner: Prism<A, B>) -> Prism<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| {
            outer_read
                .preview(source)
                .and_then(|intermediate| inner_read.preview(&intermediate))
        });
        let set = Arc::new(move |source: S, update: Update<B>| {
            match self.preview(&source) {
                // No-op on a missing outer branch, for Put and Modify alike.
                None => source,
                Some(intermediate) => {
                    let focused = inner.set(intermediate, update);
                    self.set(source, Update::Put(focused))
                }
            }
        });
        Prism::from_parts(get, set)
    }
}

// Prism . Iso -> Prism
impl<S, A, B> Compose<Iso<A, B>> for Prism<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Prism<S, B>;

    fn compose(self, inner: Iso<A, B>) -> Prism<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| {
            outer_read
                .preview(source)
                .map(|intermediate| inner_read.get(&intermediate))
        });
        let set = Arc::new(move |source: S, update: Update<B>| match update {
            // The iso builds the intermediate from the literal alone, so a
            // Put materializes through the outer prism's own setter even
            // when the outer branch is absent.
            Update::Put(value) => self.set(source, Update::Put(inner.reverse_get(&value))),
            Update::Modify(function) => match self.preview(&source) {
                None => source,
                Some(intermediate) => {
                    let focused = inner.reverse_get(&function(inner.get(&intermediate)));
                    self.set(source, Update::Put(focused))
                }
            },
        });
        Prism::from_parts(get, set)
    }
}

// Iso . Lens -> Lens
impl<S, A, B> Compose<Lens<A, B>> for Iso<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Lens<S, B>;

    fn compose(self, inner: Lens<A, B>) -> Lens<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.get(&outer_read.get(source)));
        let set = Arc::new(move |source: S, update: Update<B>| {
            let focused = inner.set(self.get(&source), update);
            self.reverse_get(&focused)
        });
        Lens::from_parts(get, set)
    }
}

// Iso . Prism -> Prism
impl<S, A, B> Compose<Prism<A, B>> for Iso<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Prism<S, B>;

    fn compose(self, inner: Prism<A, B>) -> Prism<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.preview(&outer_read.get(source)));
        let set = Arc::new(move |source: S, update: Update<B>| {
            let focused = inner.set(self.get(&source), update);
            self.reverse_get(&focused)
        });
        Prism::from_parts(get, set)
    }
}

// Iso . Iso -> Iso
impl<S, A, B> Compose<Iso<A, B>> for Iso<S, A>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    type Output = Iso<S, B>;

    fn compose(self, inner: Iso<A, B>) -> Iso<S, B> {
        let (outer_read, inner_read) = (self.clone(), inner.clone());
        let get = Arc::new(move |source: &S| inner_read.get(&outer_read.get(source)));
        let reverse_get = Arc::new(move |value: &B| self.reverse_get(&inner.reverse_get(value)));
        Iso::from_parts(get, reverse_get)
    }
}
