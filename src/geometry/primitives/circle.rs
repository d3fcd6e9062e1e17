use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape, Transformable};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform(t);
        self
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let sq_d = self.center.sq_distance_to(&other.center);
        let rr = self.radius + other.radius;
        sq_d <= rr * rr
    }
}

impl CollidesWith<Edge> for Circle {
    fn collides_with(&self, edge: &Edge) -> bool {
        edge.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl CollidesWith<Rect> for Circle {
    #[inline(always)]
    fn collides_with(&self, rect: &Rect) -> bool {
        //Based on: https://yal.cc/rectangle-circle-intersection-test/

        let Point(c_x, c_y) = self.center;

        let nearest_x = f32::max(rect.x_min, f32::min(c_x, rect.x_max));
        let nearest_y = f32::max(rect.y_min, f32::min(c_y, rect.y_max));

        (nearest_x - c_x).powi(2) + (nearest_y - c_y).powi(2) <= self.radius.powi(2)
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl DistanceTo<Point> for Circle {
    fn sq_distance_to(&self, other: &Point) -> f32 {
        self.distance_to(other).powi(2)
    }

    fn distance_to(&self, point: &Point) -> f32 {
        let sq_d = point.sq_distance_to(&self.center);
        if sq_d < self.radius.powi(2) {
            0.0 //point is inside circle
        } else {
            //point is outside circle
            f32::sqrt(sq_d) - self.radius
        }
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f32 {
        self.radius * self.radius * std::f32::consts::PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }

    fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}
