use itertools::Itertools;

use crate::geometry::primitives::Point;

/// Checks whether two convex polygons, given as CCW or CW vertex lists, overlap.
/// Touching boundaries count as overlapping.
///
/// Uses the [separating axis theorem](https://en.wikipedia.org/wiki/Hyperplane_separation_theorem):
/// two convex shapes are disjoint iff one of the edge normals of either shape separates them.
pub fn convex_polygons_collide(a: &[Point], b: &[Point]) -> bool {
    debug_assert!(a.len() >= 3 && b.len() >= 3, "degenerate polygon");
    !separating_axis_exists(a, b) && !separating_axis_exists(b, a)
}

/// Checks the edge normals of `axes_of` for an axis which separates `axes_of` from `other`.
fn separating_axis_exists(axes_of: &[Point], other: &[Point]) -> bool {
    for i in 0..axes_of.len() {
        let p = axes_of[i];
        let q = axes_of[(i + 1) % axes_of.len()];
        let normal = Point(-(q.1 - p.1), q.0 - p.0);

        let (min_a, max_a) = project(axes_of, normal);
        let (min_b, max_b) = project(other, normal);

        if min_a > max_b || min_b > max_a {
            return true;
        }
    }
    false
}

/// Projects all `points` onto `axis` and returns the (min, max) of the projections.
fn project(points: &[Point], axis: Point) -> (f32, f32) {
    points
        .iter()
        .map(|p| p.0 * axis.0 + p.1 * axis.1)
        .minmax_by(|a, b| a.partial_cmp(b).expect("NaN in projection"))
        .into_option()
        .expect("no points to project")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Vec<Point> {
        vec![
            Point(x, y),
            Point(x + size, y),
            Point(x + size, y + size),
            Point(x, y + size),
        ]
    }

    #[test]
    fn overlapping_squares_collide() {
        assert!(convex_polygons_collide(
            &square(0.0, 0.0, 2.0),
            &square(1.0, 1.0, 2.0)
        ));
    }

    #[test]
    fn disjoint_squares_do_not_collide() {
        assert!(!convex_polygons_collide(
            &square(0.0, 0.0, 1.0),
            &square(2.5, 0.0, 1.0)
        ));
    }

    #[test]
    fn touching_squares_collide() {
        assert!(convex_polygons_collide(
            &square(0.0, 0.0, 1.0),
            &square(1.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn contained_polygon_collides() {
        let triangle = vec![Point(1.0, 1.0), Point(1.5, 1.0), Point(1.25, 1.5)];
        assert!(convex_polygons_collide(&square(0.0, 0.0, 3.0), &triangle));
    }

    #[test]
    fn diagonal_neighbors_do_not_collide() {
        let tri_a = vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(0.0, 1.0)];
        let tri_b = vec![Point(1.1, 1.1), Point(2.0, 1.1), Point(1.1, 2.0)];
        assert!(!convex_polygons_collide(&tri_a, &tri_b));
    }
}
