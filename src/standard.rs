//! Standard optics that are commonly used.
//!
//! Pre-defined isos and prisms over ubiquitous shapes: identity and tuple
//! swap, and the `Some`/`Ok`/`Err` branches of `Option` and `Result`.

use crate::iso::Iso;
use crate::prism::Prism;

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use refract::identity;
///
/// let id = identity::<i32>();
/// assert_eq!(id.get(&42), 42);
/// assert_eq!(id.reverse_get(&42), 42);
/// ```
#[must_use]
pub fn identity<T>() -> Iso<T, T>
where
    T: Clone + 'static,
{
    Iso::new(|value: &T| value.clone(), |value: &T| value.clone())
}

/// Creates an Iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use refract::swap;
///
/// let swapped = swap::<i32, String>().get(&(42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[must_use]
pub fn swap<A, B>() -> Iso<(A, B), (B, A)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    Iso::new(
        |pair: &(A, B)| (pair.1.clone(), pair.0.clone()),
        |pair: &(B, A)| (pair.1.clone(), pair.0.clone()),
    )
}

/// Creates a Prism over the `Some` branch of an `Option`.
///
/// The base setter wraps the new value in `Some`, so a literal set
/// materializes over `None`.
///
/// # Example
///
/// ```
/// use refract::some;
///
/// let prism = some::<i32>();
/// assert_eq!(prism.preview(&Some(3)), Some(3));
/// assert_eq!(prism.preview(&None), None);
/// assert_eq!(prism.put(None, 5), Some(5));
/// assert_eq!(prism.modify(None, |x| x + 1), None);
/// ```
#[must_use]
pub fn some<T>() -> Prism<Option<T>, T>
where
    T: Clone + 'static,
{
    Prism::new(
        |source: &Option<T>| source.clone(),
        |_source: Option<T>, value: T| Some(value),
    )
}

/// Creates a Prism over the `Ok` branch of a `Result`.
///
/// The base setter rebuilds the `Ok` variant, so a literal set replaces an
/// `Err` outright.
#[must_use]
pub fn ok<T, E>() -> Prism<Result<T, E>, T>
where
    T: Clone + 'static,
    E: 'static,
{
    Prism::new(
        |source: &Result<T, E>| source.as_ref().ok().cloned(),
        |_source: Result<T, E>, value: T| Ok(value),
    )
}

/// Creates a Prism over the `Err` branch of a `Result`.
///
/// The base setter rebuilds the `Err` variant, so a literal set replaces an
/// `Ok` outright.
#[must_use]
pub fn err<T, E>() -> Prism<Result<T, E>, E>
where
    T: 'static,
    E: Clone + 'static,
{
    Prism::new(
        |source: &Result<T, E>| source.as_ref().err().cloned(),
        |_source: Result<T, E>, value: E| Err(value),
    )
}
