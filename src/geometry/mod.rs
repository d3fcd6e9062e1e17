/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Separating-axis test for pairs of convex polygons
pub mod sat;

mod transformation;

#[doc(inline)]
pub use transformation::Transformation;
