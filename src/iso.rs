//! Iso optics for total bidirectional conversions.
//!
//! An Iso (isomorphism) converts between two representations of the same
//! value. Both directions are total and assumed to be mutually inverse over
//! their intended domains; the library does not verify this, it is a caller
//! contract. An Iso has no partiality and no independent get/set: it only
//! transforms.
//!
//! # Laws
//!
//! Every Iso is expected to satisfy two round-trip laws:
//!
//! 1. **GetReverseGet Law**: `iso.reverse_get(&iso.get(&source)) == source`
//! 2. **ReverseGetGet Law**: `iso.get(&iso.reverse_get(&value)) == value`
//!
//! # Examples
//!
//! ```
//! use refract::Iso;
//!
//! // String <-> Vec<char> conversion
//! let chars = Iso::new(
//!     |s: &String| s.chars().collect::<Vec<_>>(),
//!     |chars: &Vec<char>| chars.iter().collect::<String>(),
//! );
//!
//! let original = "hello".to_string();
//! let exploded = chars.get(&original);
//! assert_eq!(exploded, vec!['h', 'e', 'l', 'l', 'o']);
//!
//! let back = chars.reverse_get(&exploded);
//! assert_eq!(back, original);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::update::Getter;

/// An Iso represents a total, assumed-invertible conversion between two
/// representations of the same value.
///
/// # Type Parameters
///
/// - `S`: The source representation
/// - `A`: The target representation
///
/// # Laws
///
/// 1. **GetReverseGet Law**: `iso.reverse_get(&iso.get(&source)) == source`
/// 2. **ReverseGetGet Law**: `iso.get(&iso.reverse_get(&value)) == value`
pub struct Iso<S, A>
where
    S: 'static,
    A: 'static,
{
    pub(crate) get: Getter<S, A>,
    pub(crate) reverse_get: Getter<A, S>,
}

impl<S, A> Iso<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new `Iso` from the two conversion functions.
    ///
    /// Both functions are bundled verbatim: there is no normalization and no
    /// runtime verification of the round-trip laws.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Iso;
    ///
    /// let widen = Iso::new(
    ///     |x: &i32| i64::from(*x),
    ///     |x: &i64| i32::try_from(*x).unwrap(),
    /// );
    /// assert_eq!(widen.get(&42), 42_i64);
    /// assert_eq!(widen.reverse_get(&42_i64), 42_i32);
    /// ```
    #[must_use]
    pub fn new<G, Rg>(get: G, reverse_get: Rg) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        Rg: Fn(&A) -> S + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            reverse_get: Arc::new(reverse_get),
        }
    }

    pub(crate) const fn from_parts(get: Getter<S, A>, reverse_get: Getter<A, S>) -> Self {
        Self { get, reverse_get }
    }

    /// Converts from the source representation to the target representation.
    #[must_use]
    pub fn get(&self, source: &S) -> A {
        (*self.get)(source)
    }

    /// Converts from the target representation back to the source.
    #[must_use]
    pub fn reverse_get(&self, value: &A) -> S {
        (*self.reverse_get)(value)
    }

    /// Returns the reversed Iso (swaps the two directions).
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Iso;
    ///
    /// let chars = Iso::new(
    ///     |s: &String| s.chars().collect::<Vec<_>>(),
    ///     |chars: &Vec<char>| chars.iter().collect::<String>(),
    /// );
    ///
    /// let implode = chars.reverse();
    /// assert_eq!(implode.get(&vec!['h', 'i']), "hi");
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Iso<A, S> {
        Iso {
            get: Arc::clone(&self.reverse_get),
            reverse_get: Arc::clone(&self.get),
        }
    }

    /// Applies a function on the target side and converts back.
    ///
    /// Equivalent to `iso.reverse_get(&function(iso.get(source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Iso;
    ///
    /// let chars = Iso::new(
    ///     |s: &String| s.chars().collect::<Vec<_>>(),
    ///     |chars: &Vec<char>| chars.iter().collect::<String>(),
    /// );
    ///
    /// let reversed = chars.modify(&"hello".to_string(), |mut cs| {
    ///     cs.reverse();
    ///     cs
    /// });
    /// assert_eq!(reversed, "olleh");
    /// ```
    #[must_use]
    pub fn modify<F>(&self, source: &S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(&function(self.get(source)))
    }
}

impl<S, A> Clone for Iso<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            reverse_get: Arc::clone(&self.reverse_get),
        }
    }
}

impl<S, A> fmt::Debug for Iso<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

/// Creates an iso from a pair of conversion functions.
///
/// Sugar for [`Iso::new`].
///
/// # Example
///
/// ```
/// use refract::Iso;
///
/// let swap = refract::iso!(
///     |(a, b): &(i32, String)| (b.clone(), *a),
///     |(b, a): &(String, i32)| (*a, b.clone())
/// );
///
/// let tuple = (42, "hello".to_string());
/// assert_eq!(swap.get(&tuple), ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr $(,)?) => {
        $crate::Iso::new($get, $reverse_get)
    };
}
