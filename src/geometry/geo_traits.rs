use crate::geometry::Transformation;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f32;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f32;
}

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape
    fn centroid(&self) -> Point;

    /// Area of the interior of the shape
    fn area(&self) -> f32;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;

    /// The distance between the two furthest points in the shape.
    fn diameter(&self) -> f32;
}
