use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape, Transformable};
use crate::geometry::primitives::Circle;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::geometry::primitives::Triangle;
use crate::geometry::sat;
use anyhow::Result;
use anyhow::ensure;

/// Rectangle with an arbitrary orientation, defined by an origin corner,
/// a unit direction for its local x-axis and its extents along both local axes.
/// The local y-axis is the counterclockwise perpendicular of `x_dir`.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct OrientedRect {
    pub origin: Point,
    pub x_dir: Point,
    pub width: f32,
    pub height: f32,
}

impl OrientedRect {
    pub fn try_new(origin: Point, x_dir: Point, width: f32, height: f32) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "invalid oriented rectangle extents, width: {width}, height: {height}"
        );
        let len = (x_dir.0.powi(2) + x_dir.1.powi(2)).sqrt();
        ensure!(
            len.is_finite() && len > 0.0,
            "invalid x-axis direction: {x_dir:?}"
        );
        Ok(OrientedRect {
            origin,
            x_dir: Point(x_dir.0 / len, x_dir.1 / len),
            width,
            height,
        })
    }

    pub fn y_dir(&self) -> Point {
        Point(-self.x_dir.1, self.x_dir.0)
    }

    /// Maps a point to the local coordinate frame of the rectangle.
    /// The rectangle itself occupies `[0, width] x [0, height]` in this frame.
    pub fn to_local(&self, point: &Point) -> Point {
        let d = Point(point.0 - self.origin.0, point.1 - self.origin.1);
        let y_dir = self.y_dir();
        Point(
            d.0 * self.x_dir.0 + d.1 * self.x_dir.1,
            d.0 * y_dir.0 + d.1 * y_dir.1,
        )
    }

    fn local_rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// Returns the four corners of `self`, starting at the origin corner.
    pub fn corners(&self) -> [Point; 4] {
        let Point(ox, oy) = self.origin;
        let Point(xx, xy) = self.x_dir;
        let Point(yx, yy) = self.y_dir();
        let (w, h) = (self.width, self.height);
        [
            Point(ox, oy),
            Point(ox + w * xx, oy + w * xy),
            Point(ox + w * xx + h * yx, oy + w * xy + h * yy),
            Point(ox + h * yx, oy + h * yy),
        ]
    }
}

impl From<Rect> for OrientedRect {
    fn from(r: Rect) -> Self {
        OrientedRect {
            origin: Point(r.x_min, r.y_min),
            x_dir: Point(1.0, 0.0),
            width: r.width(),
            height: r.height(),
        }
    }
}

impl Transformable for OrientedRect {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //only the linear part of the transformation applies to the axis direction
        let m = t.matrix();
        let Point(dx, dy) = self.x_dir;
        self.x_dir = Point(
            m[0][0].into_inner() * dx + m[0][1].into_inner() * dy,
            m[1][0].into_inner() * dx + m[1][1].into_inner() * dy,
        );
        self.origin.transform(t);
        self
    }
}

impl CollidesWith<Point> for OrientedRect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        self.local_rect().collides_with(&self.to_local(point))
    }
}

impl CollidesWith<Edge> for OrientedRect {
    #[inline(always)]
    fn collides_with(&self, edge: &Edge) -> bool {
        //re-express the edge in the local frame, where the rectangle is axis-aligned
        let local_edge = Edge {
            start: self.to_local(&edge.start),
            end: self.to_local(&edge.end),
        };
        self.local_rect().collides_with(&local_edge)
    }
}

impl CollidesWith<OrientedRect> for OrientedRect {
    fn collides_with(&self, other: &OrientedRect) -> bool {
        sat::convex_polygons_collide(&self.corners(), &other.corners())
    }
}

impl CollidesWith<Rect> for OrientedRect {
    fn collides_with(&self, rect: &Rect) -> bool {
        sat::convex_polygons_collide(&self.corners(), &rect.corners())
    }
}

impl CollidesWith<Triangle> for OrientedRect {
    fn collides_with(&self, triangle: &Triangle) -> bool {
        sat::convex_polygons_collide(&self.corners(), &triangle.corners())
    }
}

impl CollidesWith<Circle> for OrientedRect {
    fn collides_with(&self, circle: &Circle) -> bool {
        self.sq_distance_to(&circle.center) <= circle.radius.powi(2)
    }
}

impl DistanceTo<Point> for OrientedRect {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f32 {
        self.sq_distance_to(point).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f32 {
        //the local frame is orthonormal, so distances are preserved
        self.local_rect().sq_distance_to(&self.to_local(point))
    }
}

impl Shape for OrientedRect {
    fn centroid(&self) -> Point {
        let Point(yx, yy) = self.y_dir();
        Point(
            self.origin.0 + (self.width * self.x_dir.0 + self.height * yx) / 2.0,
            self.origin.1 + (self.width * self.x_dir.1 + self.height * yy) / 2.0,
        )
    }

    fn area(&self) -> f32 {
        self.width * self.height
    }

    fn bbox(&self) -> Rect {
        let corners = self.corners();
        let x_min = corners.iter().fold(f32::INFINITY, |acc, p| acc.min(p.0));
        let y_min = corners.iter().fold(f32::INFINITY, |acc, p| acc.min(p.1));
        let x_max = corners
            .iter()
            .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.0));
        let y_max = corners
            .iter()
            .fold(f32::NEG_INFINITY, |acc, p| acc.max(p.1));
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    fn diameter(&self) -> f32 {
        (self.width.powi(2) + self.height.powi(2)).sqrt()
    }
}
