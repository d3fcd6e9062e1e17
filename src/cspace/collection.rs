use crate::cspace::obstacle::{Obstacle, ObstacleKind};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Transformable};
use crate::geometry::primitives::{Circle, Edge, OrientedRect, Point, Rect, Triangle};
use crate::util::assertions;
use log::debug;

/// Number of vertices used when tessellating a circle for [`ObstacleCollection::to_polygons`].
pub const CIRCLE_TESSELLATION: usize = 32;

/// Stores heterogeneous 2D obstacles in four homogeneous buckets and answers
/// collision/distance queries against them, aggregate or per obstacle.
///
/// Obstacles are addressed by a single *flattened index*: the buckets are walked in
/// fixed order (axis-aligned rects, oriented rects, triangles, circles) and each
/// bucket's length is subtracted until the index falls within a bucket. All query,
/// per-obstacle and export paths share one resolution routine so the scheme cannot
/// drift between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleCollection {
    rects: Vec<Rect>,
    boxes: Vec<OrientedRect>,
    triangles: Vec<Triangle>,
    circles: Vec<Circle>,
}

impl ObstacleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an obstacle to the bucket matching its kind. No validation is performed
    /// beyond what the primitive's own constructor enforced.
    pub fn add(&mut self, obstacle: impl Into<Obstacle>) {
        match obstacle.into() {
            Obstacle::Rect(r) => self.rects.push(r),
            Obstacle::OrientedRect(o) => self.boxes.push(o),
            Obstacle::Triangle(t) => self.triangles.push(t),
            Obstacle::Circle(c) => self.circles.push(c),
        }
    }

    /// Bulk-merges all obstacles of `other` into `self`, bucket by bucket.
    pub fn extend(&mut self, other: &ObstacleCollection) {
        self.rects.extend_from_slice(&other.rects);
        self.boxes.extend_from_slice(&other.boxes);
        self.triangles.extend_from_slice(&other.triangles);
        self.circles.extend_from_slice(&other.circles);
        debug_assert!(assertions::collection_indices_resolvable(self));
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.boxes.clear();
        self.triangles.clear();
        self.circles.clear();
    }

    pub fn num_obstacles(&self) -> usize {
        self.rects.len() + self.boxes.len() + self.triangles.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_obstacles() == 0
    }

    /// Resolves a flattened obstacle index into its kind and the index within that
    /// kind's bucket. Panics if `index` is out of range - callers must stay within
    /// `[0, num_obstacles())`.
    pub fn resolve(&self, index: usize) -> (ObstacleKind, usize) {
        let mut i = index;
        if i < self.rects.len() {
            return (ObstacleKind::Rect, i);
        }
        i -= self.rects.len();
        if i < self.boxes.len() {
            return (ObstacleKind::OrientedRect, i);
        }
        i -= self.boxes.len();
        if i < self.triangles.len() {
            return (ObstacleKind::Triangle, i);
        }
        i -= self.triangles.len();
        if i < self.circles.len() {
            return (ObstacleKind::Circle, i);
        }
        panic!(
            "obstacle index out of range: {index} >= {}",
            self.num_obstacles()
        );
    }

    pub fn kind(&self, index: usize) -> ObstacleKind {
        self.resolve(index).0
    }

    pub fn local_index(&self, index: usize) -> usize {
        self.resolve(index).1
    }

    /// Returns a copy of the obstacle at the given flattened index.
    pub fn obstacle(&self, index: usize) -> Obstacle {
        match self.resolve(index) {
            (ObstacleKind::Rect, i) => Obstacle::Rect(self.rects[i]),
            (ObstacleKind::OrientedRect, i) => Obstacle::OrientedRect(self.boxes[i]),
            (ObstacleKind::Triangle, i) => Obstacle::Triangle(self.triangles[i]),
            (ObstacleKind::Circle, i) => Obstacle::Circle(self.circles[i]),
        }
    }

    /// All obstacles in flattened-index order.
    pub fn iter(&self) -> impl Iterator<Item = Obstacle> + '_ {
        let rects = self.rects.iter().copied().map(Obstacle::Rect);
        let boxes = self.boxes.iter().copied().map(Obstacle::OrientedRect);
        let triangles = self.triangles.iter().copied().map(Obstacle::Triangle);
        let circles = self.circles.iter().copied().map(Obstacle::Circle);
        rects.chain(boxes).chain(triangles).chain(circles)
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn boxes(&self) -> &[OrientedRect] {
        &self.boxes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Minimum distance from `point` to any stored obstacle, 0 if the point is inside one.
    /// Returns infinity for an empty collection.
    pub fn distance(&self, point: &Point) -> f32 {
        //compare squared distances for the polygonal kinds, take the root only once
        let mut sq_min = f32::INFINITY;
        for r in &self.rects {
            sq_min = sq_min.min(r.sq_distance_to(point));
        }
        for b in &self.boxes {
            sq_min = sq_min.min(b.sq_distance_to(point));
        }
        for t in &self.triangles {
            sq_min = sq_min.min(t.sq_distance_to(point));
        }
        //circle distances already have the radius subtracted, they cannot be compared squared
        let mut min = sq_min.sqrt();
        for c in &self.circles {
            min = min.min(c.distance_to(point));
        }
        min.max(0.0)
    }

    /// Surface-to-surface clearance between `circle` and the closest stored obstacle,
    /// 0 meaning touching or overlapping.
    pub fn distance_to_circle(&self, circle: &Circle) -> f32 {
        let d = self.distance(&circle.center);
        if d <= circle.radius {
            0.0
        } else {
            d - circle.radius
        }
    }

    pub fn collides_point(&self, point: &Point) -> bool {
        self.rects.iter().any(|r| r.collides_with(point))
            || self.boxes.iter().any(|b| b.collides_with(point))
            || self.triangles.iter().any(|t| t.collides_with(point))
            || self.circles.iter().any(|c| c.collides_with(point))
    }

    pub fn collides_edge(&self, edge: &Edge) -> bool {
        self.rects.iter().any(|r| r.collides_with(edge))
            || self.boxes.iter().any(|b| b.collides_with(edge))
            || self.triangles.iter().any(|t| t.collides_with(edge))
            || self.circles.iter().any(|c| c.collides_with(edge))
    }

    pub fn collides_circle(&self, circle: &Circle) -> bool {
        self.distance(&circle.center) <= circle.radius
    }

    pub fn collides_rect(&self, rect: &Rect) -> bool {
        self.collides_obstacle(&Obstacle::Rect(*rect))
    }

    pub fn collides_oriented_rect(&self, rect: &OrientedRect) -> bool {
        self.collides_obstacle(&Obstacle::OrientedRect(*rect))
    }

    pub fn collides_triangle(&self, triangle: &Triangle) -> bool {
        self.collides_obstacle(&Obstacle::Triangle(*triangle))
    }

    /// Whether `obstacle` intersects at least one stored obstacle.
    /// Short-circuits in fixed bucket order; the result is order-independent.
    pub fn collides_obstacle(&self, obstacle: &Obstacle) -> bool {
        self.iter().any(|stored| stored.collides_with(obstacle))
    }

    /// Whether any obstacle of `other` intersects any obstacle of `self`.
    pub fn collides_collection(&self, other: &ObstacleCollection) -> bool {
        other.iter().any(|o| self.collides_obstacle(&o))
    }

    /// Distance from `point` to the single obstacle at the given flattened index.
    pub fn distance_at(&self, point: &Point, index: usize) -> f32 {
        self.obstacle(index).distance_to(point)
    }

    /// Clearance between `circle` and the single obstacle at the given flattened index.
    pub fn distance_to_circle_at(&self, circle: &Circle, index: usize) -> f32 {
        let d = self.distance_at(&circle.center, index);
        if d <= circle.radius {
            0.0
        } else {
            d - circle.radius
        }
    }

    pub fn collides_point_at(&self, point: &Point, index: usize) -> bool {
        self.obstacle(index).collides_with(point)
    }

    pub fn collides_edge_at(&self, edge: &Edge, index: usize) -> bool {
        self.obstacle(index).collides_with(edge)
    }

    pub fn collides_circle_at(&self, circle: &Circle, index: usize) -> bool {
        self.distance_at(&circle.center, index) <= circle.radius
    }

    pub fn collides_rect_at(&self, rect: &Rect, index: usize) -> bool {
        self.collides_obstacle_at(&Obstacle::Rect(*rect), index)
    }

    pub fn collides_oriented_rect_at(&self, rect: &OrientedRect, index: usize) -> bool {
        self.collides_obstacle_at(&Obstacle::OrientedRect(*rect), index)
    }

    pub fn collides_triangle_at(&self, triangle: &Triangle, index: usize) -> bool {
        self.collides_obstacle_at(&Obstacle::Triangle(*triangle), index)
    }

    pub fn collides_obstacle_at(&self, obstacle: &Obstacle, index: usize) -> bool {
        self.obstacle(index).collides_with(obstacle)
    }

    pub fn collides_collection_at(&self, other: &ObstacleCollection, index: usize) -> bool {
        other.iter().any(|o| self.collides_obstacle_at(&o, index))
    }

    /// Applies a rigid transformation to every stored obstacle in place.
    ///
    /// Axis-aligned rects cannot represent rotation, so they are re-expressed as
    /// oriented rects and migrated to the oriented bucket. Flattened indices remain
    /// stable for triangles and circles only; callers caching indices across a
    /// transform must re-resolve rect indices.
    pub fn transform(&mut self, t: &Transformation) -> &mut Self {
        for b in &mut self.boxes {
            b.transform(t);
        }
        if !self.rects.is_empty() {
            debug!(
                "[OBS] migrating {} axis-aligned rect(s) to the oriented bucket",
                self.rects.len()
            );
            for r in self.rects.drain(..) {
                let mut oriented = OrientedRect::from(r);
                oriented.transform(t);
                self.boxes.push(oriented);
            }
        }
        for tri in &mut self.triangles {
            tri.transform(t);
        }
        for c in &mut self.circles {
            c.transform(t);
        }
        debug_assert!(assertions::collection_indices_resolvable(self));
        self
    }

    /// Produces one polygon per obstacle in flattened-index order: 4 vertices for
    /// rectangles, 3 for triangles, a [`CIRCLE_TESSELLATION`]-sided approximation
    /// for circles.
    pub fn to_polygons(&self) -> Vec<Vec<Point>> {
        self.iter().map(|o| polygonize(&o)).collect()
    }
}

fn polygonize(obstacle: &Obstacle) -> Vec<Point> {
    match obstacle {
        Obstacle::Rect(r) => r.corners().to_vec(),
        Obstacle::OrientedRect(o) => o.corners().to_vec(),
        Obstacle::Triangle(t) => t.corners().to_vec(),
        Obstacle::Circle(c) => (0..CIRCLE_TESSELLATION)
            .map(|k| {
                let angle = std::f32::consts::TAU * k as f32 / CIRCLE_TESSELLATION as f32;
                Point(
                    c.center.0 + c.radius * angle.cos(),
                    c.center.1 + c.radius * angle.sin(),
                )
            })
            .collect(),
    }
}
