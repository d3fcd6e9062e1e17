use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::cspace::collection::ObstacleCollection;
use crate::cspace::sampling;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::{Circle, Edge, OrientedRect, Point, Rect, Triangle};
use crate::planning::EdgePlanner;

/// Number of virtual obstacles induced by the rectangular domain boundary:
/// its faces x-min, x-max, y-min and y-max, in that order.
pub const BOUNDARY_FACES: usize = 4;

/// The metric a [`CSpace`] measures distances in. Neighborhood sampling follows
/// the same metric family, planners rely on the two agreeing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    #[serde(rename = "euclidean")]
    Euclidean,
    #[serde(rename = "Linf")]
    Chebyshev,
}

impl Metric {
    pub fn distance(&self, a: Point, b: Point) -> f32 {
        match self {
            Metric::Euclidean => a.distance_to(&b),
            Metric::Chebyshev => f32::max((a.0 - b.0).abs(), (a.1 - b.1).abs()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "Linf",
        }
    }
}

///Configuration of a [`CSpace`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CSpaceConfig {
    ///Minimum corner of the rectangular domain
    pub domain_min: (f32, f32),
    ///Maximum corner of the rectangular domain
    pub domain_max: (f32, f32),
    #[serde(default)]
    pub metric: Metric,
    ///Tolerance for bisection-style visibility checkers
    #[serde(default = "default_visibility_eps")]
    pub visibility_eps: f32,
}

fn default_visibility_eps() -> f32 {
    0.01
}

impl Default for CSpaceConfig {
    fn default() -> Self {
        CSpaceConfig {
            domain_min: (0.0, 0.0),
            domain_max: (1.0, 1.0),
            metric: Metric::Euclidean,
            visibility_eps: default_visibility_eps(),
        }
    }
}

/// A rectangular 2D configuration space populated with obstacles.
///
/// The four domain boundary faces act as virtual obstacles prepended to the
/// collection's index space: global indices `0..4` address the faces (x-min,
/// x-max, y-min, y-max), index `4 + i` addresses the collection's obstacle `i`.
///
/// All query methods are read-only; concurrent queries against a shared `CSpace`
/// require no coordination. Mutating the obstacle set ([`CSpace::obstacles`])
/// requires exclusive access.
#[derive(Clone, Debug)]
pub struct CSpace {
    pub obstacles: ObstacleCollection,
    pub domain: Rect,
    pub metric: Metric,
    /// Tolerance for bisection-style visibility checkers, unused by the exact edge planner.
    pub visibility_eps: f32,
}

impl CSpace {
    pub fn new(domain: Rect, metric: Metric) -> Self {
        CSpace {
            obstacles: ObstacleCollection::new(),
            domain,
            metric,
            visibility_eps: default_visibility_eps(),
        }
    }

    pub fn from_config(config: CSpaceConfig) -> Result<Self> {
        let domain = Rect::from_diagonal_corners(
            Point::from(config.domain_min),
            Point::from(config.domain_max),
        )?;
        Ok(CSpace {
            obstacles: ObstacleCollection::new(),
            domain,
            metric: config.metric,
            visibility_eps: config.visibility_eps,
        })
    }

    /// Whether the configuration lies within the domain and outside every obstacle.
    pub fn is_feasible(&self, config: Point) -> bool {
        //domain containment is the cheap reject
        if !self.domain.collides_with(&config) {
            return false;
        }
        !self.obstacles.collides_point(&config)
    }

    /// Whether the configuration does not violate the single identified obstacle:
    /// a boundary face for indices `0..4`, a collection obstacle for `4 + i`.
    pub fn is_feasible_at(&self, config: Point, index: usize) -> bool {
        match index {
            0 => config.0 >= self.domain.x_min,
            1 => config.0 <= self.domain.x_max,
            2 => config.1 >= self.domain.y_min,
            3 => config.1 <= self.domain.y_max,
            _ => !self
                .obstacles
                .collides_point_at(&config, index - BOUNDARY_FACES),
        }
    }

    /// Minimum clearance from `point` to any boundary face or obstacle.
    /// 0 as soon as the point lies outside the domain on any axis.
    pub fn obstacle_distance(&self, point: &Point) -> f32 {
        let d = &self.domain;
        if point.0 < d.x_min || point.0 > d.x_max {
            return 0.0;
        }
        let mut min = f32::min(point.0 - d.x_min, d.x_max - point.0);
        if point.1 < d.y_min || point.1 > d.y_max {
            return 0.0;
        }
        min = min.min(point.1 - d.y_min).min(d.y_max - point.1);
        min.min(self.obstacles.distance(point))
    }

    /// Minimum clearance of `circle` to any boundary face or obstacle, requiring the
    /// circle to clear the domain by its radius on every face.
    /// 0 as soon as the circle pokes outside the domain.
    pub fn obstacle_distance_to_circle(&self, circle: &Circle) -> f32 {
        let d = &self.domain;
        let Point(x, y) = circle.center;
        let r = circle.radius;
        if x - r < d.x_min || x + r > d.x_max {
            return 0.0;
        }
        let mut min = f32::min(x - r - d.x_min, d.x_max - x - r);
        if y - r < d.y_min || y + r > d.y_max {
            return 0.0;
        }
        min = min.min(y - r - d.y_min).min(d.y_max - y - r);
        min.min(self.obstacles.distance_to_circle(circle))
    }

    /// Whether the segment leaves the domain or collides with any obstacle.
    pub fn obstacle_overlap_edge(&self, edge: &Edge) -> bool {
        if !self.domain.collides_with(&edge.start) || !self.domain.collides_with(&edge.end) {
            return true;
        }
        self.obstacles.collides_edge(edge)
    }

    /// Whether the segment crosses the single identified obstacle. Boundary faces
    /// test only whether either endpoint lies beyond that face.
    pub fn obstacle_overlap_edge_at(&self, edge: &Edge, index: usize) -> bool {
        let d = &self.domain;
        let (s, e) = (edge.start, edge.end);
        match index {
            0 => s.0 < d.x_min || e.0 < d.x_min,
            1 => s.0 > d.x_max || e.0 > d.x_max,
            2 => s.1 < d.y_min || e.1 < d.y_min,
            3 => s.1 > d.y_max || e.1 > d.y_max,
            _ => self.obstacles.collides_edge_at(edge, index - BOUNDARY_FACES),
        }
    }

    pub fn obstacle_overlap_circle(&self, circle: &Circle) -> bool {
        self.obstacle_distance(&circle.center) <= circle.radius
    }

    pub fn obstacle_overlap_oriented_rect(&self, rect: &OrientedRect) -> bool {
        if self.domain.relation_to(rect.bbox()) != GeoRelation::Surrounding {
            return true;
        }
        self.obstacles.collides_oriented_rect(rect)
    }

    pub fn obstacle_overlap_triangle(&self, triangle: &Triangle) -> bool {
        if self.domain.relation_to(triangle.bbox()) != GeoRelation::Surrounding {
            return true;
        }
        self.obstacles.collides_triangle(triangle)
    }

    /// Draws a configuration uniformly from the domain.
    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        sampling::uniform_point_in_rect(&self.domain, rng)
    }

    /// Draws a configuration uniformly from the neighborhood of `center` with the
    /// given radius, measured in this space's metric.
    pub fn sample_neighborhood(&self, center: Point, radius: f32, rng: &mut impl Rng) -> Point {
        let offset = match self.metric {
            Metric::Euclidean => sampling::uniform_point_in_disc(radius, rng),
            Metric::Chebyshev => sampling::uniform_point_in_square(radius, rng),
        };
        Point(center.0 + offset.0, center.1 + offset.1)
    }

    /// Distance between two configurations, in this space's metric.
    pub fn distance(&self, a: Point, b: Point) -> f32 {
        self.metric.distance(a, b)
    }

    /// Total obstacle count: the four boundary faces plus the collection's obstacles.
    pub fn num_obstacles(&self) -> usize {
        BOUNDARY_FACES + self.obstacles.num_obstacles()
    }

    /// Human-readable label for a global obstacle index, e.g. `"xmin"` or `"circle[0]"`.
    pub fn obstacle_name(&self, index: usize) -> String {
        match index {
            0 => "xmin".to_string(),
            1 => "xmax".to_string(),
            2 => "ymin".to_string(),
            3 => "ymax".to_string(),
            _ => {
                let local = index - BOUNDARY_FACES;
                format!(
                    "{}[{}]",
                    self.obstacles.kind(local).name(),
                    self.obstacles.local_index(local)
                )
            }
        }
    }

    /// Creates an [`EdgePlanner`] for the straight segment between two configurations.
    pub fn edge_plan(&self, start: Point, end: Point) -> EdgePlanner<'_> {
        EdgePlanner::new(self, start, end)
    }

    /// Creates an [`EdgePlanner`] already resolved against a single obstacle.
    pub fn edge_plan_at(&self, start: Point, end: Point, index: usize) -> EdgePlanner<'_> {
        EdgePlanner::resolved_at(self, start, end, index)
    }

    /// Flat introspection map describing this space.
    pub fn properties(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("cartesian".to_string(), json!(1));
        map.insert("geodesic".to_string(), json!(1));
        map.insert("metric".to_string(), json!(self.metric.name()));
        map.insert("volume".to_string(), json!(self.domain.area()));
        map.insert("diameter".to_string(), json!(self.domain.diameter()));
        map.insert(
            "minimum".to_string(),
            json!([self.domain.x_min, self.domain.y_min]),
        );
        map.insert(
            "maximum".to_string(),
            json!([self.domain.x_max, self.domain.y_max]),
        );
        map
    }
}
