use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::UnitDisc;

use crate::geometry::primitives::{Point, Rect};

/// Samples a [`Point`] from a uniform distribution over `rect`.
pub fn uniform_point_in_rect(rect: &Rect, rng: &mut impl Rng) -> Point {
    let x = Uniform::new_inclusive(rect.x_min, rect.x_max).sample(rng);
    let y = Uniform::new_inclusive(rect.y_min, rect.y_max).sample(rng);
    Point(x, y)
}

/// Samples a [`Point`] from a uniform distribution over a disc of the given radius,
/// centered at the origin.
pub fn uniform_point_in_disc(radius: f32, rng: &mut impl Rng) -> Point {
    let [x, y]: [f32; 2] = UnitDisc.sample(rng);
    Point(x * radius, y * radius)
}

/// Samples a [`Point`] from a uniform distribution over the square `[-radius, radius]^2`,
/// centered at the origin.
pub fn uniform_point_in_square(radius: f32, rng: &mut impl Rng) -> Point {
    let side = Uniform::new_inclusive(-radius, radius);
    Point(side.sample(rng), side.sample(rng))
}
