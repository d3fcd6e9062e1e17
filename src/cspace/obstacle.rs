use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape, Transformable};
use crate::geometry::primitives::{Circle, Edge, OrientedRect, Point, Rect, Triangle};

/// The kinds of geometric primitives that can be stored as obstacles,
/// in the fixed bucket order of the [`ObstacleCollection`](crate::cspace::ObstacleCollection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Rect,
    OrientedRect,
    Triangle,
    Circle,
}

impl ObstacleKind {
    /// Short name used when labeling obstacles, e.g. `"circle[0]"`.
    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Rect => "aabb",
            ObstacleKind::OrientedRect => "box",
            ObstacleKind::Triangle => "triangle",
            ObstacleKind::Circle => "circle",
        }
    }
}

/// A single obstacle - a tagged union over the supported primitive kinds.
/// Copied freely, value semantics only.
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum Obstacle {
    Rect(Rect),
    OrientedRect(OrientedRect),
    Triangle(Triangle),
    Circle(Circle),
}

impl Obstacle {
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Rect(_) => ObstacleKind::Rect,
            Obstacle::OrientedRect(_) => ObstacleKind::OrientedRect,
            Obstacle::Triangle(_) => ObstacleKind::Triangle,
            Obstacle::Circle(_) => ObstacleKind::Circle,
        }
    }

    pub fn bbox(&self) -> Rect {
        match self {
            Obstacle::Rect(r) => r.bbox(),
            Obstacle::OrientedRect(o) => o.bbox(),
            Obstacle::Triangle(t) => t.bbox(),
            Obstacle::Circle(c) => c.bbox(),
        }
    }
}

impl From<Rect> for Obstacle {
    fn from(r: Rect) -> Self {
        Obstacle::Rect(r)
    }
}

impl From<OrientedRect> for Obstacle {
    fn from(o: OrientedRect) -> Self {
        Obstacle::OrientedRect(o)
    }
}

impl From<Triangle> for Obstacle {
    fn from(t: Triangle) -> Self {
        Obstacle::Triangle(t)
    }
}

impl From<Circle> for Obstacle {
    fn from(c: Circle) -> Self {
        Obstacle::Circle(c)
    }
}

impl CollidesWith<Point> for Obstacle {
    fn collides_with(&self, point: &Point) -> bool {
        match self {
            Obstacle::Rect(r) => r.collides_with(point),
            Obstacle::OrientedRect(o) => o.collides_with(point),
            Obstacle::Triangle(t) => t.collides_with(point),
            Obstacle::Circle(c) => c.collides_with(point),
        }
    }
}

impl CollidesWith<Edge> for Obstacle {
    fn collides_with(&self, edge: &Edge) -> bool {
        match self {
            Obstacle::Rect(r) => r.collides_with(edge),
            Obstacle::OrientedRect(o) => o.collides_with(edge),
            Obstacle::Triangle(t) => t.collides_with(edge),
            Obstacle::Circle(c) => c.collides_with(edge),
        }
    }
}

impl CollidesWith<Obstacle> for Obstacle {
    /// Full pairwise dispatch across the primitive kinds.
    /// Axis-aligned rectangles are re-expressed as oriented ones where no direct test exists.
    fn collides_with(&self, other: &Obstacle) -> bool {
        use Obstacle::*;
        match (self, other) {
            (Rect(a), Rect(b)) => a.collides_with(b),
            (Rect(a), OrientedRect(b)) | (OrientedRect(b), Rect(a)) => b.collides_with(a),
            (Rect(a), Triangle(b)) | (Triangle(b), Rect(a)) => b.collides_with(a),
            (Rect(a), Circle(b)) | (Circle(b), Rect(a)) => b.collides_with(a),
            (OrientedRect(a), OrientedRect(b)) => a.collides_with(b),
            (OrientedRect(a), Triangle(b)) | (Triangle(b), OrientedRect(a)) => a.collides_with(b),
            (OrientedRect(a), Circle(b)) | (Circle(b), OrientedRect(a)) => a.collides_with(b),
            (Triangle(a), Triangle(b)) => a.collides_with(b),
            (Triangle(a), Circle(b)) | (Circle(b), Triangle(a)) => a.collides_with(b),
            (Circle(a), Circle(b)) => a.collides_with(b),
        }
    }
}

impl DistanceTo<Point> for Obstacle {
    fn distance_to(&self, point: &Point) -> f32 {
        match self {
            Obstacle::Rect(r) => r.distance_to(point),
            Obstacle::OrientedRect(o) => o.distance_to(point),
            Obstacle::Triangle(t) => t.distance_to(point),
            Obstacle::Circle(c) => c.distance_to(point),
        }
    }

    fn sq_distance_to(&self, point: &Point) -> f32 {
        match self {
            Obstacle::Rect(r) => r.sq_distance_to(point),
            Obstacle::OrientedRect(o) => o.sq_distance_to(point),
            Obstacle::Triangle(t) => t.sq_distance_to(point),
            Obstacle::Circle(c) => c.sq_distance_to(point),
        }
    }
}

impl Transformable for Obstacle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            //a transformed axis-aligned rectangle is no longer axis-aligned
            Obstacle::Rect(r) => {
                let mut oriented = OrientedRect::from(*r);
                oriented.transform(t);
                *self = Obstacle::OrientedRect(oriented);
            }
            Obstacle::OrientedRect(o) => {
                o.transform(t);
            }
            Obstacle::Triangle(tri) => {
                tri.transform(t);
            }
            Obstacle::Circle(c) => {
                c.transform(t);
            }
        }
        self
    }
}
