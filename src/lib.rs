//! # refract
//!
//! Composable optics for immutable nested data: Lenses for fields that
//! always exist, Prisms for branches that may be absent, and Isos for total
//! bidirectional conversions, together with a closed composition algebra
//! that decides the kind of any composite optic.
//!
//! ## Overview
//!
//! - [`Lens`]: total get/set access to a single field
//! - [`Prism`]: partial access to an optional field or union variant
//! - [`Iso`]: total, assumed-invertible conversion between representations
//! - [`Compose`]: the composition table. Lens∘Lens is a Lens, anything
//!   containing a Prism is a Prism, Iso∘Iso is an Iso
//! - [`Optic`]: the runtime-tagged sum of the three kinds
//! - [`Update`]: the literal-or-function argument every `set` accepts
//! - [`OpticTypes`]: type-level access to an optic's source and target
//!
//! Every optic is a stateless bundle of pure functions: setting never
//! mutates the source, it consumes it and returns a new one. Optics are
//! cheap to clone and safe to share across threads.
//!
//! ## Example
//!
//! ```
//! use refract::{Compose, Lens, Prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Compose lenses to focus on a nested field.
//! let person_city = refract::lens!(Person, address).compose(refract::lens!(Address, city));
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
//! assert_eq!(moved.address.street, "123"); // unrelated fields preserved
//! ```
//!
//! ## The literal / function asymmetry
//!
//! Every `set` accepts either a literal replacement or a pure update
//! function (see [`Update`]). Over a missing branch the two behave
//! differently: a literal always delegates to the owning prism's setter,
//! which may materialize the branch, while a function update is a no-op
//! since there is no current value to feed it.
//!
//! ```
//! use refract::Prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape { Circle(f64), Square(f64) }
//!
//! let circle = refract::prism!(Shape, Circle);
//!
//! let square = Shape::Square(10.0);
//! assert_eq!(circle.modify(square.clone(), |r| r * 2.0), square); // no-op
//! assert_eq!(circle.put(square, 7.0), Shape::Circle(7.0));        // materializes
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic types, the composition trait, and the standard
/// optics.
///
/// # Usage
///
/// ```rust
/// use refract::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::Compose;
    pub use crate::iso::Iso;
    pub use crate::lens::Lens;
    pub use crate::optic::Optic;
    pub use crate::optic::OpticKind;
    pub use crate::optic::OpticTypes;
    pub use crate::prism::Prism;
    pub use crate::standard::err;
    pub use crate::standard::identity;
    pub use crate::standard::ok;
    pub use crate::standard::some;
    pub use crate::standard::swap;
    pub use crate::update::Update;
}

mod compose;
mod iso;
mod lens;
mod optic;
mod prism;
mod standard;
mod update;

pub use compose::Compose;
pub use iso::Iso;
pub use lens::Lens;
pub use optic::Optic;
pub use optic::OpticKind;
pub use optic::OpticTypes;
pub use prism::Prism;
pub use standard::err;
pub use standard::identity;
pub use standard::ok;
pub use standard::some;
pub use standard::swap;
pub use update::Update;
