//! Prism optics for branches that may be absent.
//!
//! A Prism focuses on a value that may not be there: an optional field, or
//! the payload of one variant of a discriminated union. Its getter returns
//! `Option<A>`; its setter obeys a deliberate asymmetry:
//!
//! - a **literal** set always delegates to the constructor-supplied base
//!   setter, which may materialize the focused branch;
//! - a **functional** set is a no-op (returns the source unchanged) whenever
//!   the branch is absent, because there is no current value to feed the
//!   function.
//!
//! # Examples
//!
//! ```
//! use refract::Prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle = refract::prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.preview(&Shape::Rectangle(3.0, 4.0)), None);
//!
//! // A functional update on a non-matching variant leaves it untouched.
//! let rect = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(circle.modify(rect.clone(), |r| r * 2.0), rect);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::update::{OptionGetter, Setter, Update};

/// A Prism focuses on a value that may be absent.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure or union)
/// - `A`: The target type (the focused branch, if present)
///
/// # Laws
///
/// 1. When the branch is present, `prism.preview(&prism.put(source, value)) == Some(value)`
///    holds for any base setter that writes the focused branch.
/// 2. When the branch is absent, `prism.modify(source, f) == source` exactly.
pub struct Prism<S, A>
where
    S: 'static,
    A: 'static,
{
    pub(crate) get: OptionGetter<S, A>,
    pub(crate) set: Setter<S, A>,
}

impl<S, A> Prism<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new `Prism` from a partial getter and a base setter.
    ///
    /// The base setter is the minimal contract: given the source and a
    /// literal value, produce a new source with the branch written. It is
    /// what materializes (or clears) the branch; the prism never creates
    /// structure beyond what the base setter does.
    ///
    /// The constructed prism exposes the fuller [`Update`]-accepting
    /// contract by normalizing internally: a `Put` calls the base setter
    /// directly; a `Modify` first reads the current value and, if the branch
    /// is absent, returns the source unchanged, otherwise feeds the
    /// function's result to the base setter. Callers never special-case
    /// function updaters themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Config { theme: Option<String> }
    ///
    /// let theme = Prism::new(
    ///     |config: &Config| config.theme.clone(),
    ///     |config: Config, theme: String| Config { theme: Some(theme), ..config },
    /// );
    ///
    /// let bare = Config { theme: None };
    /// assert_eq!(theme.preview(&bare), None);
    ///
    /// // A literal set materializes the branch through the base setter.
    /// let dark = theme.put(bare.clone(), "dark".to_string());
    /// assert_eq!(dark.theme, Some("dark".to_string()));
    ///
    /// // A functional set over the absent branch is a no-op.
    /// assert_eq!(theme.modify(bare.clone(), |t| t.to_uppercase()), bare);
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> Option<A> + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        let get: OptionGetter<S, A> = Arc::new(getter);
        let read = Arc::clone(&get);
        let set: Setter<S, A> = Arc::new(move |source: S, update: Update<A>| match update {
            Update::Put(value) => setter(source, value),
            Update::Modify(function) => match (*read)(&source) {
                None => source,
                Some(current) => {
                    let value = function(current);
                    setter(source, value)
                }
            },
        });
        Self { get, set }
    }

    /// Creates a new `Prism` from a partial getter and a full setter.
    ///
    /// The setter takes the [`Update`]-accepting contract verbatim, with no
    /// normalization applied. The caller is responsible for upholding the
    /// missing-branch rule: a `Modify` must return the source unchanged when
    /// the branch is absent.
    #[must_use]
    pub fn with_setter<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> Option<A> + Send + Sync + 'static,
        St: Fn(S, Update<A>) -> S + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(getter),
            set: Arc::new(setter),
        }
    }

    pub(crate) const fn from_parts(get: OptionGetter<S, A>, set: Setter<S, A>) -> Self {
        Self { get, set }
    }

    /// Attempts to get the focused value.
    ///
    /// Returns `None` when the branch is absent; absence is not an error.
    #[must_use]
    pub fn preview(&self, source: &S) -> Option<A> {
        (*self.get)(source)
    }

    /// Sets the focused branch from an [`Update`], returning a new source.
    ///
    /// A `Put` always delegates to the base setter; a `Modify` is a no-op
    /// when the branch is absent.
    #[must_use]
    pub fn set(&self, source: S, update: Update<A>) -> S {
        (*self.set)(source, update)
    }

    /// Writes a literal value through the base setter.
    ///
    /// Always succeeds; whether an absent branch is materialized is decided
    /// by the base setter supplied at construction.
    #[must_use]
    pub fn put(&self, source: S, value: A) -> S {
        self.set(source, Update::Put(value))
    }

    /// Transforms the focused value with a pure function.
    ///
    /// Returns the source unchanged when the branch is absent.
    #[must_use]
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A + 'static,
    {
        self.set(source, Update::modify(function))
    }

    /// Checks whether the focused branch is present.
    #[must_use]
    pub fn is_present(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }
}

impl<S, A> Clone for Prism<S, A>
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

impl<S, A> fmt::Debug for Prism<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

/// Creates a prism for an enum variant.
///
/// This macro generates a [`Prism`] that focuses on the payload of the given
/// single-value tuple variant. The generated base setter rebuilds the
/// variant from the new value, so a literal set always succeeds regardless
/// of which variant the source currently holds.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Limitations
///
/// Only tuple variants with a single value are supported. For variants with
/// multiple fields or named fields, use [`Prism::new`] directly.
///
/// # Example
///
/// ```
/// use refract::Prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = refract::prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.preview(&MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.preview(&MyOption::None), None);
///
/// let constructed = some_prism.put(MyOption::None, 100);
/// assert_eq!(constructed, MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::Prism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => {
                    ::core::option::Option::Some(::core::clone::Clone::clone(value))
                }
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |_source: $enum_type, value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::Prism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => {
                    ::core::option::Option::Some(::core::clone::Clone::clone(value))
                }
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |_source: $enum_type<$($generic),+>, value| $enum_type::$variant(value),
        )
    };
}
