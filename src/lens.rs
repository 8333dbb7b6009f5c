//! Lens optics for fields that always exist.
//!
//! A Lens provides get/set access to a field within a larger structure.
//! Its getter is total and its setter always succeeds; setting consumes the
//! source and returns a new one, so the original is never mutated and
//! unrelated fields are moved through unchanged.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.put(source, lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.put(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.put(lens.put(source, v1), v2) == lens.put(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use refract::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = refract::lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.put(point, 100);
//! assert_eq!(updated.x, 100);
//! assert_eq!(updated.y, 20);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::update::{Getter, Setter, Update};

/// A Lens focuses on a single field that is guaranteed to exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.put(source, lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.put(source, value)) == value`
/// 3. **PutPut Law**: `lens.put(lens.put(source, v1), v2) == lens.put(source, v2)`
pub struct Lens<S, A>
where
    S: 'static,
    A: 'static,
{
    pub(crate) get: Getter<S, A>,
    pub(crate) set: Setter<S, A>,
}

impl<S, A> Lens<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new `Lens` from a getter and a plain setter.
    ///
    /// The plain setter takes a literal value; the constructed lens exposes
    /// the fuller [`Update`]-accepting contract by normalizing internally:
    /// a `Put` calls the setter directly, a `Modify` reads the current value
    /// through the getter, applies the function, and then calls the setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Extracts the focused field from the source
    /// * `setter` - Creates a new source with the field replaced
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = Lens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    ///
    /// let point = Point { x: 10, y: 20 };
    /// assert_eq!(x_lens.get(&point), 10);
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        let get: Getter<S, A> = Arc::new(getter);
        let read = Arc::clone(&get);
        let set: Setter<S, A> = Arc::new(move |source: S, update: Update<A>| match update {
            Update::Put(value) => setter(source, value),
            Update::Modify(function) => {
                let value = function((*read)(&source));
                setter(source, value)
            }
        });
        Self { get, set }
    }

    pub(crate) const fn from_parts(get: Getter<S, A>, set: Setter<S, A>) -> Self {
        Self { get, set }
    }

    /// Gets the focused field. Total, never fails.
    #[must_use]
    pub fn get(&self, source: &S) -> A {
        (*self.get)(source)
    }

    /// Sets the focused field from an [`Update`], returning a new source.
    ///
    /// Accepts both literal replacements and functional updates; see
    /// [`put`](Self::put) and [`modify`](Self::modify) for the common cases.
    #[must_use]
    pub fn set(&self, source: S, update: Update<A>) -> S {
        (*self.set)(source, update)
    }

    /// Replaces the focused field with a literal value.
    #[must_use]
    pub fn put(&self, source: S, value: A) -> S {
        self.set(source, Update::Put(value))
    }

    /// Transforms the focused field with a pure function.
    ///
    /// Equivalent to getting the current value, applying the function, and
    /// setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = refract::lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    #[must_use]
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A + 'static,
    {
        self.set(source, Update::modify(function))
    }
}

impl<S, A> Clone for Lens<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, A> fmt::Debug for Lens<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

/// Creates a lens for a struct field.
///
/// This is the single-field projection constructor: the generated getter
/// clones the field and the generated setter replaces it on an owned source,
/// moving every other field through unchanged.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use refract::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let name_lens = refract::lens!(Person, name);
///
/// let person = Person { name: "John".to_string(), age: 30 };
/// assert_eq!(name_lens.get(&person), "John");
///
/// let renamed = name_lens.put(person, "Jane".to_string());
/// assert_eq!(renamed, Person { name: "Jane".to_string(), age: 30 });
/// ```
///
/// Unknown fields are rejected at compile time:
///
/// ```compile_fail
/// #[derive(Clone)]
/// struct Point { x: i32 }
///
/// let bad = refract::lens!(Point, z);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ty, $field:ident) => {
        $crate::Lens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
