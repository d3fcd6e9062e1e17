use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape, Transformable};
use crate::geometry::primitives::Circle;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::OrientedRect;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::geometry::sat;
use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Geometric primitive representing a triangle, either winding order is accepted
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn try_new(a: Point, b: Point, c: Point) -> Result<Self> {
        let signed_area = cross(a, b, c) / 2.0;
        ensure!(
            signed_area != 0.0 && signed_area.is_finite(),
            "degenerate triangle: {a:?}, {b:?}, {c:?}"
        );
        Ok(Triangle { a, b, c })
    }

    pub fn corners(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge {
                start: self.a,
                end: self.b,
            },
            Edge {
                start: self.b,
                end: self.c,
            },
            Edge {
                start: self.c,
                end: self.a,
            },
        ]
    }

    /// Whether `point` lies inside or on the boundary of the triangle.
    pub fn contains(&self, point: &Point) -> bool {
        //the point is inside iff it is on the same side of all three edges,
        //with "on an edge" counting as inside for either winding
        let d1 = cross(self.a, self.b, *point);
        let d2 = cross(self.b, self.c, *point);
        let d3 = cross(self.c, self.a, *point);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }
}

/// 2D cross product of the vectors `p -> q` and `p -> r`.
#[inline(always)]
fn cross(p: Point, q: Point, r: Point) -> f32 {
    (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
}

impl Transformable for Triangle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Triangle { a, b, c } = self;
        a.transform(t);
        b.transform(t);
        c.transform(t);
        self
    }
}

impl CollidesWith<Point> for Triangle {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        self.contains(point)
    }
}

impl CollidesWith<Edge> for Triangle {
    fn collides_with(&self, edge: &Edge) -> bool {
        if self.contains(&edge.start) || self.contains(&edge.end) {
            return true;
        }
        self.edges().iter().any(|side| side.collides_with(edge))
    }
}

impl CollidesWith<Triangle> for Triangle {
    fn collides_with(&self, other: &Triangle) -> bool {
        sat::convex_polygons_collide(&self.corners(), &other.corners())
    }
}

impl CollidesWith<OrientedRect> for Triangle {
    fn collides_with(&self, rect: &OrientedRect) -> bool {
        rect.collides_with(self)
    }
}

impl CollidesWith<Rect> for Triangle {
    fn collides_with(&self, rect: &Rect) -> bool {
        //re-express the axis-aligned rectangle as an oriented one, unifying the dispatch
        OrientedRect::from(*rect).collides_with(self)
    }
}

impl CollidesWith<Circle> for Triangle {
    fn collides_with(&self, circle: &Circle) -> bool {
        self.sq_distance_to(&circle.center) <= circle.radius.powi(2)
    }
}

impl DistanceTo<Point> for Triangle {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f32 {
        self.sq_distance_to(point).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f32 {
        if self.contains(point) {
            return 0.0;
        }
        self.edges()
            .iter()
            .map(|e| e.sq_distance_to(point))
            .min_by_key(|&d| OrderedFloat(d))
            .expect("triangle has no edges")
    }
}

impl Shape for Triangle {
    fn centroid(&self) -> Point {
        Point(
            (self.a.0 + self.b.0 + self.c.0) / 3.0,
            (self.a.1 + self.b.1 + self.c.1) / 3.0,
        )
    }

    fn area(&self) -> f32 {
        cross(self.a, self.b, self.c).abs() / 2.0
    }

    fn bbox(&self) -> Rect {
        let corners = self.corners();
        Rect {
            x_min: corners.iter().fold(f32::INFINITY, |acc, p| acc.min(p.0)),
            y_min: corners.iter().fold(f32::INFINITY, |acc, p| acc.min(p.1)),
            x_max: corners
                .iter()
                .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.0)),
            y_max: corners
                .iter()
                .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.1)),
        }
    }

    fn diameter(&self) -> f32 {
        self.corners()
            .iter()
            .tuple_combinations()
            .map(|(p, q)| p.distance_to(q))
            .max_by_key(|&d| OrderedFloat(d))
            .expect("triangle has no corners")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn tri() -> Triangle {
        Triangle::try_new(Point(0.0, 0.0), Point(2.0, 0.0), Point(0.0, 2.0)).unwrap()
    }

    #[test]
    fn contains_is_winding_insensitive() {
        let cw = Triangle::try_new(Point(0.0, 0.0), Point(0.0, 2.0), Point(2.0, 0.0)).unwrap();
        for p in [Point(0.5, 0.5), Point(0.0, 0.0), Point(1.0, 1.0)] {
            assert!(tri().contains(&p));
            assert!(cw.contains(&p));
        }
        assert!(!tri().contains(&Point(1.5, 1.5)));
        assert!(!cw.contains(&Point(1.5, 1.5)));
    }

    #[test]
    fn distance_is_zero_inside_and_positive_outside() {
        assert_eq!(tri().distance_to(&Point(0.5, 0.5)), 0.0);
        assert!(approx_eq!(
            f32,
            tri().distance_to(&Point(3.0, 0.0)),
            1.0,
            epsilon = 1e-5
        ));
    }

    #[test]
    fn degenerate_triangle_is_rejected() {
        assert!(Triangle::try_new(Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)).is_err());
    }

    #[test]
    fn edge_crossing_without_contained_endpoint() {
        let edge = Edge {
            start: Point(-1.0, 0.5),
            end: Point(3.0, 0.5),
        };
        assert!(tri().collides_with(&edge));
    }
}
